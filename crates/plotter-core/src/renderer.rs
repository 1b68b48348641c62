//! Renderer collaborator interface.

use crate::path::Path;
use kurbo::Point;

/// Outward notifications from input strategies to the drawing layer.
///
/// All calls are one-way. The renderer owns whatever it keeps, including
/// persistence of finalized paths.
pub trait InputRenderer {
    /// Show the committed-so-far outline of the polygon being drawn.
    fn draw_input_path(&mut self, path: &Path);

    /// Show a temporary segment from the last vertex to the pointer.
    fn draw_input_temp_segment(&mut self, segment: &Path);

    /// Show a temporary vertex marker at the pointer.
    fn draw_input_temp_vertex(&mut self, point: Point);

    /// Remove the in-progress outline.
    fn clear_input(&mut self);

    /// Remove temporary segment and vertex marker.
    fn clear_input_temp(&mut self);

    /// Commit a finalized closed path to the output.
    fn draw_path(&mut self, path: &Path);
}

/// A single recorded renderer call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    DrawInputPath(Path),
    DrawInputTempSegment(Path),
    DrawInputTempVertex(Point),
    ClearInput,
    ClearInputTemp,
    DrawPath(Path),
}

impl RenderCall {
    /// Whether this call draws something temporary.
    pub fn is_preview(&self) -> bool {
        matches!(
            self,
            RenderCall::DrawInputTempSegment(_) | RenderCall::DrawInputTempVertex(_)
        )
    }
}

/// Renderer that records every call, for tests and diagnostics.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    calls: Vec<RenderCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls received so far.
    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    /// Take the recorded calls, leaving the log empty.
    pub fn take_calls(&mut self) -> Vec<RenderCall> {
        std::mem::take(&mut self.calls)
    }

    /// Finalized paths in the order they were committed.
    pub fn finalized(&self) -> Vec<&Path> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RenderCall::DrawPath(path) => Some(path),
                _ => None,
            })
            .collect()
    }
}

impl InputRenderer for RecordingRenderer {
    fn draw_input_path(&mut self, path: &Path) {
        self.calls.push(RenderCall::DrawInputPath(path.clone()));
    }

    fn draw_input_temp_segment(&mut self, segment: &Path) {
        self.calls.push(RenderCall::DrawInputTempSegment(segment.clone()));
    }

    fn draw_input_temp_vertex(&mut self, point: Point) {
        self.calls.push(RenderCall::DrawInputTempVertex(point));
    }

    fn clear_input(&mut self) {
        self.calls.push(RenderCall::ClearInput);
    }

    fn clear_input_temp(&mut self) {
        self.calls.push(RenderCall::ClearInputTemp);
    }

    fn draw_path(&mut self, path: &Path) {
        self.calls.push(RenderCall::DrawPath(path.clone()));
    }
}
