//! Grid Plotter Core Library
//!
//! Pointer-to-grid mapping and polygon input for a grid drawing surface.
//! Rendering is left to an [`InputRenderer`] supplied by the host.

pub mod attributes;
pub mod grid;
pub mod input;
pub mod path;
pub mod plotter;
pub mod renderer;
pub mod strategy;

pub use kurbo::Point;

pub use attributes::{AttributeSource, to_flag, to_integer};
pub use grid::{Axis, GridConfig, GridCoordinate, SurfaceLayout, map_point, map_to_grid, snap_unit};
pub use input::{MouseButton, PointerEvent};
pub use path::{Path, PathCommand, PathError, PathResult};
pub use plotter::Plotter;
pub use renderer::{InputRenderer, RecordingRenderer, RenderCall};
pub use strategy::{InputStrategy, InteractionState, NoOpStrategy, PolygonStrategy, StrategyKind};
