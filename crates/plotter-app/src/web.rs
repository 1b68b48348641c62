//! WebAssembly entry point: a plotter handle driven by page event listeners.

use plotter_core::{GridConfig, Plotter, StrategyKind};
use plotter_render::SvgRenderer;
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

/// Initialize logging and panic reporting.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        return;
    }
    log::info!("Grid plotter (WASM) ready");
}

/// Collect string attributes from a plain JS object.
fn read_attributes(attributes: &js_sys::Object) -> BTreeMap<String, String> {
    js_sys::Object::entries(attributes)
        .iter()
        .filter_map(|entry| {
            let pair = js_sys::Array::from(&entry);
            let key = pair.get(0).as_string()?;
            let value = pair.get(1);
            let value = value
                .as_string()
                .or_else(|| value.as_f64().map(|n| n.to_string()))
                .unwrap_or_default();
            Some((key, value))
        })
        .collect()
}

/// Plotter handle owned by the page.
#[wasm_bindgen]
pub struct WebPlotter {
    plotter: Plotter<SvgRenderer>,
}

#[wasm_bindgen]
impl WebPlotter {
    /// Create a plotter from element-style attributes.
    #[wasm_bindgen(constructor)]
    pub fn new(attributes: &js_sys::Object) -> WebPlotter {
        let config = GridConfig::from_attributes(&read_attributes(attributes));
        WebPlotter {
            plotter: Plotter::with_strategy(config, SvgRenderer::new(), StrategyKind::Polygon),
        }
    }

    /// Replace the configuration; any polygon in progress is dropped.
    pub fn reconfigure(&mut self, attributes: &js_sys::Object) {
        let config = GridConfig::from_attributes(&read_attributes(attributes));
        self.plotter.set_config(config);
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.plotter.on_pointer_move(x, y);
    }

    pub fn activate(&mut self, x: f64, y: f64) {
        self.plotter.on_activate(x, y);
    }

    pub fn blur(&mut self) {
        self.plotter.terminate();
    }

    pub fn undo(&mut self) {
        self.plotter.undo();
    }

    /// Surface width in pixels, margins included.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.plotter.layout().view_width
    }

    /// Surface height in pixels, margins included.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.plotter.layout().view_height
    }

    /// Number of finalized paths.
    #[wasm_bindgen(js_name = pathCount)]
    pub fn path_count(&self) -> usize {
        self.plotter.renderer().output_paths().len()
    }

    /// Current SVG document.
    pub fn svg(&self) -> Result<String, JsValue> {
        self.plotter
            .renderer()
            .to_svg(self.plotter.config())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
