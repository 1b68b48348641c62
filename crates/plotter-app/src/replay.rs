//! Replay of recorded pointer-event scripts.

use plotter_core::{GridConfig, MouseButton, Plotter, PointerEvent, StrategyKind};
use plotter_render::{RendererError, SvgRenderer};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid script: {0}")]
    Script(#[from] serde_json::Error),
    #[error("Render error: {0}")]
    Render(#[from] RendererError),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// One recorded host event.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScriptEvent {
    Move {
        x: f64,
        y: f64,
    },
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
    Leave,
    Blur,
    Undo,
}

/// A recorded interaction session.
///
/// ```json
/// {
///   "attributes": { "columns": "8", "rows": "8", "snap": "" },
///   "strategy": "polygon",
///   "events": [ { "type": "down", "x": 96, "y": 96 }, { "type": "blur" } ]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    /// Element attributes, parsed the same way the host element does.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub strategy: StrategyKind,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    /// Parse a script from JSON text.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a script from a file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Grid configuration described by the attributes.
    pub fn config(&self) -> GridConfig {
        GridConfig::from_attributes(&self.attributes)
    }
}

fn apply(plotter: &mut Plotter<SvgRenderer>, event: ScriptEvent) {
    match event {
        ScriptEvent::Move { x, y } => plotter.handle_pointer_event(PointerEvent::Move { x, y }),
        ScriptEvent::Down { x, y, button } => {
            plotter.handle_pointer_event(PointerEvent::Down { x, y, button })
        }
        ScriptEvent::Leave => plotter.handle_pointer_event(PointerEvent::Leave),
        ScriptEvent::Blur => plotter.handle_pointer_event(PointerEvent::Blur),
        ScriptEvent::Undo => plotter.undo(),
    }
}

/// Replay a script against a fresh SVG-backed plotter.
pub fn replay(script: &Script) -> Plotter<SvgRenderer> {
    let mut plotter = Plotter::with_strategy(script.config(), SvgRenderer::new(), script.strategy);
    for event in &script.events {
        apply(&mut plotter, *event);
    }
    log::debug!("Replayed {} events", script.events.len());
    plotter
}

/// Replay the script at `input` and write the SVG to `output`, or stdout.
///
/// Returns the number of finalized paths.
pub fn run(input: &Path, output: Option<&Path>) -> AppResult<usize> {
    let script = Script::load(input)?;
    let plotter = replay(&script);
    let count = plotter.renderer().output_paths().len();

    match output {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            plotter.renderer().write_svg(plotter.config(), &mut file)?;
            file.flush()?;
            log::info!("Saved {} paths to: {:?}", count, path);
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            plotter.renderer().write_svg(plotter.config(), &mut lock)?;
        }
    }

    Ok(count)
}
