//! Grid Plotter Render Library
//!
//! Renderer implementations for the grid plotter. The default implementation
//! retains the input and output layers and serializes them to SVG.

mod renderer;
mod svg_impl;

pub use renderer::{RenderResult, RenderStyle, RendererError, css_color, default_input_stroke};
pub use svg_impl::{OutputId, OutputPath, SvgRenderer};
