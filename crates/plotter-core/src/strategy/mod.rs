//! Interchangeable input strategies.

mod polygon;

pub use polygon::{InteractionState, PolygonStrategy};

use crate::grid::GridCoordinate;
use crate::renderer::InputRenderer;
use serde::{Deserialize, Serialize};

/// Available input strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Ignore all input.
    None,
    /// Click to place polygon vertices; click the first vertex to close.
    #[default]
    Polygon,
}

impl StrategyKind {
    /// Create a fresh strategy of this kind.
    pub fn create(self) -> Box<dyn InputStrategy> {
        match self {
            StrategyKind::None => Box::new(NoOpStrategy),
            StrategyKind::Polygon => Box::new(PolygonStrategy::new()),
        }
    }
}

/// Reaction to pointer input, already mapped to grid coordinates.
///
/// No method fails: events that make no sense in the current state are
/// ignored.
pub trait InputStrategy {
    /// Which kind of strategy this is.
    fn kind(&self) -> StrategyKind;

    /// Pointer moved.
    fn on_move(&mut self, grid: GridCoordinate, renderer: &mut dyn InputRenderer);

    /// Pointer activated (click or tap).
    fn on_activate(&mut self, grid: GridCoordinate, renderer: &mut dyn InputRenderer);

    /// Undo request. Not implemented by any strategy yet.
    fn on_undo(&mut self, renderer: &mut dyn InputRenderer);

    /// Abandon any interaction in progress. Safe to call in any state.
    fn on_terminate(&mut self, renderer: &mut dyn InputRenderer);

    /// Whether an interaction is in progress.
    fn is_collecting(&self) -> bool {
        false
    }
}

/// Strategy that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpStrategy;

impl InputStrategy for NoOpStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::None
    }

    fn on_move(&mut self, _grid: GridCoordinate, _renderer: &mut dyn InputRenderer) {}

    fn on_activate(&mut self, _grid: GridCoordinate, _renderer: &mut dyn InputRenderer) {}

    fn on_undo(&mut self, _renderer: &mut dyn InputRenderer) {}

    fn on_terminate(&mut self, _renderer: &mut dyn InputRenderer) {}
}
