//! Host-side dispatch: maps pixels to grid coordinates and drives the active
//! input strategy.

use crate::grid::{GridConfig, SurfaceLayout, map_point};
use crate::input::{MouseButton, PointerEvent};
use crate::renderer::InputRenderer;
use crate::strategy::{InputStrategy, StrategyKind};
use kurbo::Point;

/// A grid drawing surface bound to a renderer.
pub struct Plotter<R: InputRenderer> {
    config: GridConfig,
    strategy: Box<dyn InputStrategy>,
    renderer: R,
}

impl<R: InputRenderer> Plotter<R> {
    /// Create a plotter with the default polygon strategy.
    pub fn new(config: GridConfig, renderer: R) -> Self {
        Self::with_strategy(config, renderer, StrategyKind::default())
    }

    /// Create a plotter with a specific strategy.
    pub fn with_strategy(config: GridConfig, renderer: R, kind: StrategyKind) -> Self {
        debug_assert!(config.is_valid(), "invalid grid config: {:?}", config);
        Self {
            config,
            strategy: kind.create(),
            renderer,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn layout(&self) -> SurfaceLayout {
        SurfaceLayout::from_config(&self.config)
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Consume the plotter and return its renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    /// Whether a polygon is in progress.
    pub fn is_collecting(&self) -> bool {
        self.strategy.is_collecting()
    }

    /// Replace the grid configuration.
    ///
    /// Any interaction in progress is terminated first, since its vertices
    /// belong to the old grid.
    pub fn set_config(&mut self, config: GridConfig) {
        debug_assert!(config.is_valid(), "invalid grid config: {:?}", config);
        if config != self.config {
            self.terminate();
            self.config = config;
        }
    }

    /// Replace the active strategy, terminating the current one.
    pub fn set_strategy(&mut self, kind: StrategyKind) {
        self.terminate();
        self.strategy = kind.create();
        log::debug!("Active strategy: {:?}", kind);
    }

    /// Map a surface pixel position to a grid coordinate.
    pub fn to_grid(&self, pixel: Point) -> Point {
        map_point(pixel, &self.config)
    }

    /// Pointer moved to a surface pixel position.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        let grid = self.to_grid(Point::new(x, y));
        self.strategy.on_move(grid, &mut self.renderer);
    }

    /// Pointer activated at a surface pixel position.
    pub fn on_activate(&mut self, x: f64, y: f64) {
        let grid = self.to_grid(Point::new(x, y));
        self.strategy.on_activate(grid, &mut self.renderer);
    }

    /// Abandon any interaction in progress, e.g. on surface blur.
    pub fn terminate(&mut self) {
        self.strategy.on_terminate(&mut self.renderer);
    }

    pub fn undo(&mut self) {
        self.strategy.on_undo(&mut self.renderer);
    }

    /// Dispatch a host event.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Move { x, y } => self.on_pointer_move(x, y),
            PointerEvent::Down { x, y, button: MouseButton::Left } => self.on_activate(x, y),
            PointerEvent::Down { button, .. } => {
                log::debug!("Ignoring {:?} button press", button);
            }
            PointerEvent::Leave => {}
            PointerEvent::Blur => self.terminate(),
        }
    }
}
