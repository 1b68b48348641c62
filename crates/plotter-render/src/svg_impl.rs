//! Retained SVG renderer.

use crate::renderer::{RenderResult, RenderStyle, css_color};
use kurbo::Point;
use plotter_core::grid::{GridConfig, SurfaceLayout};
use plotter_core::path::Path;
use plotter_core::renderer::InputRenderer;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use uuid::Uuid;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Unique identifier for finalized output paths.
pub type OutputId = Uuid;

/// A finalized path kept on the output layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputPath {
    pub id: OutputId,
    pub path: Path,
}

/// Renderer that keeps the input, temporary and output layers in memory and
/// serializes them to an SVG document on demand.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    style: RenderStyle,
    input_path: Option<Path>,
    temp_segment: Option<Path>,
    temp_vertex: Option<Point>,
    output: Vec<OutputPath>,
}

impl SvgRenderer {
    /// Create a renderer with the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with a custom style.
    pub fn with_style(style: RenderStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// In-progress outline, if shown.
    pub fn input_path(&self) -> Option<&Path> {
        self.input_path.as_ref()
    }

    /// Temporary preview segment, if shown.
    pub fn temp_segment(&self) -> Option<&Path> {
        self.temp_segment.as_ref()
    }

    /// Temporary vertex marker, if shown.
    pub fn temp_vertex(&self) -> Option<Point> {
        self.temp_vertex
    }

    /// Finalized paths, oldest first.
    pub fn output_paths(&self) -> &[OutputPath] {
        &self.output
    }

    /// Remove a finalized path. Returns whether it existed.
    pub fn remove_output(&mut self, id: OutputId) -> bool {
        let before = self.output.len();
        self.output.retain(|p| p.id != id);
        self.output.len() != before
    }

    /// Remove all finalized paths.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Serialize all layers to an SVG document sized for `config`.
    pub fn to_svg(&self, config: &GridConfig) -> RenderResult<String> {
        let layout = SurfaceLayout::from_config(config);
        let style = &self.style;
        let stroke = css_color(style.input_stroke);
        let mut out = String::new();

        writeln!(
            out,
            r#"<svg xmlns="{}" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            SVG_NS, layout.view_width, layout.view_height, layout.view_width, layout.view_height,
        )?;

        writeln!(
            out,
            r#"  <svg class="output-canvas" x="{}" y="{}" width="{}" height="{}" viewBox="{}">"#,
            layout.canvas_x,
            layout.canvas_y,
            layout.canvas_width,
            layout.canvas_height,
            layout.output_view_box(),
        )?;
        let fill = css_color(style.output_fill);
        for output in &self.output {
            writeln!(
                out,
                r#"    <path class="output-path" data-id="{}" d="{}" fill="{}"/>"#,
                output.id, output.path, fill,
            )?;
        }
        writeln!(out, "  </svg>")?;

        writeln!(
            out,
            r#"  <svg class="input-canvas" width="{}" height="{}" viewBox="{}">"#,
            layout.view_width,
            layout.view_height,
            layout.input_view_box(),
        )?;
        if let Some(path) = &self.input_path {
            writeln!(
                out,
                r#"    <path class="input-path" d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
                path, stroke, style.input_stroke_width,
            )?;
        }
        if let Some(segment) = &self.temp_segment {
            writeln!(
                out,
                r#"    <path class="input-temp-path" d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-opacity="{}" stroke-linecap="round"/>"#,
                segment, stroke, style.input_stroke_width, style.temp_opacity,
            )?;
        }
        if let Some(point) = self.temp_vertex {
            writeln!(
                out,
                r#"    <circle class="input-temp-point" cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                point.x, point.y, style.vertex_radius, stroke,
            )?;
        }
        writeln!(out, "  </svg>")?;
        writeln!(out, "</svg>")?;

        Ok(out)
    }

    /// Write the SVG document to `writer`.
    pub fn write_svg<W: std::io::Write>(&self, config: &GridConfig, writer: &mut W) -> RenderResult<()> {
        let document = self.to_svg(config)?;
        writer.write_all(document.as_bytes())?;
        Ok(())
    }
}

impl InputRenderer for SvgRenderer {
    fn draw_input_path(&mut self, path: &Path) {
        self.input_path = Some(path.clone());
    }

    fn draw_input_temp_segment(&mut self, segment: &Path) {
        self.temp_segment = Some(segment.clone());
    }

    fn draw_input_temp_vertex(&mut self, point: Point) {
        self.temp_vertex = Some(point);
    }

    fn clear_input(&mut self) {
        self.input_path = None;
    }

    fn clear_input_temp(&mut self) {
        self.temp_segment = None;
        self.temp_vertex = None;
    }

    fn draw_path(&mut self, path: &Path) {
        let id = Uuid::new_v4();
        log::info!("Committed output path {}: {}", id, path);
        self.output.push(OutputPath {
            id,
            path: path.clone(),
        });
    }
}
