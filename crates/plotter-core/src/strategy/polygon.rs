//! Polygon input: click to place vertices, click the first vertex to close.

use super::{InputStrategy, StrategyKind};
use crate::grid::GridCoordinate;
use crate::path::Path;
use crate::renderer::InputRenderer;

/// State of a polygon interaction.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    /// No polygon in progress.
    #[default]
    Idle,
    /// Vertices are being collected.
    Collecting(Path),
}

/// Turns activations into a closed polygon path.
///
/// The first activation starts the polygon. Each later activation adds a
/// vertex, unless it hits the first vertex exactly, in which case the
/// polygon is closed and committed.
#[derive(Debug, Clone, Default)]
pub struct PolygonStrategy {
    state: InteractionState,
}

impl PolygonStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current interaction state.
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// The open path being collected, if any.
    pub fn pending(&self) -> Option<&Path> {
        match &self.state {
            InteractionState::Collecting(path) => Some(path),
            InteractionState::Idle => None,
        }
    }
}

impl InputStrategy for PolygonStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Polygon
    }

    fn on_move(&mut self, grid: GridCoordinate, renderer: &mut dyn InputRenderer) {
        let InteractionState::Collecting(path) = &self.state else {
            return;
        };

        let segment = Path::segment(path.last_vertex(), grid);
        renderer.clear_input_temp();
        renderer.draw_input_temp_segment(&segment);
        renderer.draw_input_temp_vertex(grid);
    }

    fn on_activate(&mut self, grid: GridCoordinate, renderer: &mut dyn InputRenderer) {
        match std::mem::take(&mut self.state) {
            InteractionState::Idle => {
                log::debug!("Polygon started at ({}, {})", grid.x, grid.y);
                self.state = InteractionState::Collecting(Path::new(grid));
            }
            InteractionState::Collecting(mut path) => {
                if grid != path.start() {
                    path.line_to(grid);
                    renderer.draw_input_path(&path);
                    self.state = InteractionState::Collecting(path);
                } else if path.line_count() == 0 {
                    // Nothing to close yet.
                    log::debug!("Ignoring activation on the lone start vertex");
                    self.state = InteractionState::Collecting(path);
                } else {
                    path.close();
                    log::info!("Polygon closed with {} vertices", path.line_count() + 1);
                    renderer.draw_path(&path);
                    renderer.clear_input_temp();
                    renderer.clear_input();
                }
            }
        }
    }

    fn on_undo(&mut self, _renderer: &mut dyn InputRenderer) {
        log::debug!("Undo is not supported by the polygon strategy");
    }

    fn on_terminate(&mut self, renderer: &mut dyn InputRenderer) {
        renderer.clear_input_temp();
        renderer.clear_input();
        self.state = InteractionState::Idle;
    }

    fn is_collecting(&self) -> bool {
        matches!(self.state, InteractionState::Collecting(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathCommand;
    use crate::renderer::{RecordingRenderer, RenderCall};
    use kurbo::Point;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_first_activation_starts_silently() {
        let mut renderer = RecordingRenderer::new();
        let mut strategy = PolygonStrategy::new();

        strategy.on_activate(p(1.0, 2.0), &mut renderer);

        assert!(renderer.calls().is_empty());
        assert!(strategy.is_collecting());
        assert_eq!(strategy.pending().unwrap().commands(), &[PathCommand::MoveTo(p(1.0, 2.0))]);
    }

    #[test]
    fn test_polygon_closure() {
        let mut renderer = RecordingRenderer::new();
        let mut strategy = PolygonStrategy::new();

        for point in [p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0), p(0.0, 0.0)] {
            strategy.on_activate(point, &mut renderer);
        }

        let finalized = renderer.finalized();
        assert_eq!(finalized.len(), 1);
        assert_eq!(
            finalized[0].commands(),
            &[
                PathCommand::MoveTo(p(0.0, 0.0)),
                PathCommand::LineTo(p(4.0, 0.0)),
                PathCommand::LineTo(p(4.0, 4.0)),
                PathCommand::LineTo(p(0.0, 4.0)),
                PathCommand::ClosePath,
            ]
        );
        assert_eq!(strategy.state(), &InteractionState::Idle);
        assert!(strategy.pending().is_none());
    }

    #[test]
    fn test_closure_clears_previews() {
        let mut renderer = RecordingRenderer::new();
        let mut strategy = PolygonStrategy::new();

        strategy.on_activate(p(0.0, 0.0), &mut renderer);
        strategy.on_activate(p(2.0, 0.0), &mut renderer);
        renderer.take_calls();

        strategy.on_activate(p(0.0, 0.0), &mut renderer);

        let calls = renderer.calls();
        assert_eq!(calls.len(), 3);
        assert!(matches!(calls[0], RenderCall::DrawPath(_)));
        assert_eq!(calls[1], RenderCall::ClearInputTemp);
        assert_eq!(calls[2], RenderCall::ClearInput);
    }

    #[test]
    fn test_open_path_preview_on_each_vertex() {
        let mut renderer = RecordingRenderer::new();
        let mut strategy = PolygonStrategy::new();

        strategy.on_activate(p(0.0, 0.0), &mut renderer);
        strategy.on_activate(p(3.0, 0.0), &mut renderer);
        strategy.on_activate(p(3.0, 3.0), &mut renderer);

        let calls = renderer.calls();
        assert_eq!(calls.len(), 2);
        match &calls[1] {
            RenderCall::DrawInputPath(path) => {
                assert!(!path.is_closed());
                assert_eq!(path.to_svg(), "M0,0 L3,0 L3,3");
            }
            other => panic!("unexpected call {:?}", other),
        }
        assert!(renderer.finalized().is_empty());
    }

    #[test]
    fn test_move_while_idle_is_noop() {
        let mut renderer = RecordingRenderer::new();
        let mut strategy = PolygonStrategy::new();

        strategy.on_move(p(5.0, 5.0), &mut renderer);

        assert!(renderer.calls().is_empty());
        assert!(!strategy.is_collecting());
    }

    #[test]
    fn test_move_previews_from_last_vertex() {
        let mut renderer = RecordingRenderer::new();
        let mut strategy = PolygonStrategy::new();

        strategy.on_activate(p(0.0, 0.0), &mut renderer);
        strategy.on_activate(p(2.0, 0.0), &mut renderer);
        renderer.take_calls();

        strategy.on_move(p(2.5, 1.5), &mut renderer);

        assert_eq!(
            renderer.calls(),
            &[
                RenderCall::ClearInputTemp,
                RenderCall::DrawInputTempSegment(Path::segment(p(2.0, 0.0), p(2.5, 1.5))),
                RenderCall::DrawInputTempVertex(p(2.5, 1.5)),
            ]
        );
    }

    #[test]
    fn test_activation_on_lone_start_vertex_is_ignored() {
        let mut renderer = RecordingRenderer::new();
        let mut strategy = PolygonStrategy::new();

        strategy.on_activate(p(1.0, 1.0), &mut renderer);
        strategy.on_activate(p(1.0, 1.0), &mut renderer);

        assert!(renderer.calls().is_empty());
        assert_eq!(strategy.pending().unwrap().len(), 1);
    }

    #[test]
    fn test_two_vertex_polygon_closes() {
        let mut renderer = RecordingRenderer::new();
        let mut strategy = PolygonStrategy::new();

        strategy.on_activate(p(1.0, 1.0), &mut renderer);
        strategy.on_activate(p(2.0, 1.0), &mut renderer);
        strategy.on_activate(p(1.0, 1.0), &mut renderer);

        assert_eq!(renderer.finalized()[0].to_svg(), "M1,1 L2,1 Z");
        assert!(!strategy.is_collecting());
    }

    #[test]
    fn test_revisiting_middle_vertex_does_not_close() {
        let mut renderer = RecordingRenderer::new();
        let mut strategy = PolygonStrategy::new();

        for point in [p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(2.0, 0.0)] {
            strategy.on_activate(point, &mut renderer);
        }

        assert!(renderer.finalized().is_empty());
        assert_eq!(strategy.pending().unwrap().line_count(), 3);
    }

    #[test]
    fn test_terminate_is_idempotent() {
        let mut renderer = RecordingRenderer::new();
        let mut strategy = PolygonStrategy::new();

        strategy.on_terminate(&mut renderer);
        strategy.on_activate(p(0.0, 0.0), &mut renderer);
        strategy.on_activate(p(1.0, 0.0), &mut renderer);
        strategy.on_terminate(&mut renderer);
        strategy.on_terminate(&mut renderer);

        assert_eq!(strategy.state(), &InteractionState::Idle);
        assert!(renderer.finalized().is_empty());
        assert_eq!(renderer.calls().last(), Some(&RenderCall::ClearInput));
    }

    #[test]
    fn test_terminate_then_restart() {
        let mut renderer = RecordingRenderer::new();
        let mut strategy = PolygonStrategy::new();

        strategy.on_activate(p(0.0, 0.0), &mut renderer);
        strategy.on_activate(p(1.0, 0.0), &mut renderer);
        strategy.on_terminate(&mut renderer);

        // The old start vertex no longer closes anything.
        strategy.on_activate(p(0.0, 0.0), &mut renderer);
        assert_eq!(strategy.pending().unwrap().len(), 1);

        strategy.on_move(p(0.5, 0.5), &mut renderer);
        assert!(renderer.calls().last().unwrap().is_preview());
    }

    #[test]
    fn test_undo_keeps_state() {
        let mut renderer = RecordingRenderer::new();
        let mut strategy = PolygonStrategy::new();

        strategy.on_activate(p(0.0, 0.0), &mut renderer);
        strategy.on_activate(p(1.0, 0.0), &mut renderer);
        renderer.take_calls();
        strategy.on_undo(&mut renderer);

        assert!(renderer.calls().is_empty());
        assert_eq!(strategy.pending().unwrap().line_count(), 1);
    }
}
