//! Grid Plotter Application
//!
//! Host shell around the plotter core: replays recorded sessions to SVG on
//! native targets and exposes a handle for web pages on WASM.

mod replay;

pub use replay::{AppError, AppResult, Script, ScriptEvent, replay, run};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{WebPlotter, start};
