//! Renderer errors and styling.

use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Format failed: {0}")]
    Format(#[from] std::fmt::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Default stroke color of input artifacts (teal).
pub fn default_input_stroke() -> Color {
    Color::from_rgba8(35, 197, 185, 255)
}

/// Visual parameters for the SVG layers, in grid units where applicable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    /// Stroke color of the in-progress outline and preview segment.
    pub input_stroke: Color,
    /// Stroke width of input artifacts.
    pub input_stroke_width: f64,
    /// Opacity of the temporary segment.
    pub temp_opacity: f64,
    /// Radius of the temporary vertex marker.
    pub vertex_radius: f64,
    /// Fill color of finalized paths.
    pub output_fill: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            input_stroke: default_input_stroke(),
            input_stroke_width: 0.1,
            temp_opacity: 0.5,
            vertex_radius: 0.15,
            output_fill: Color::from_rgba8(0, 0, 0, 255),
        }
    }
}

impl RenderStyle {
    /// Set the input stroke color.
    pub fn with_input_stroke(mut self, color: Color) -> Self {
        self.input_stroke = color;
        self
    }

    /// Set the output fill color.
    pub fn with_output_fill(mut self, color: Color) -> Self {
        self.output_fill = color;
        self
    }
}

/// Format a color as a CSS `rgb()`/`rgba()` value.
pub fn css_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        format!("rgb({}, {}, {})", rgba.r, rgba.g, rgba.b)
    } else {
        let alpha = rgba.a as f64 / 255.0;
        format!("rgba({}, {}, {}, {:.3})", rgba.r, rgba.g, rgba.b, alpha)
    }
}
