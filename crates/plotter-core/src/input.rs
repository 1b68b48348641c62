//! Pointer and focus events delivered by the host.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

/// Event on the input surface, with positions in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PointerEvent {
    /// Pointer moved.
    Move { x: f64, y: f64 },
    /// Button pressed.
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
    /// Pointer left the surface.
    Leave,
    /// Surface lost focus.
    Blur,
}

impl PointerEvent {
    /// Pixel position of the event, if it has one.
    pub fn position(&self) -> Option<Point> {
        match *self {
            PointerEvent::Move { x, y } | PointerEvent::Down { x, y, .. } => Some(Point::new(x, y)),
            PointerEvent::Leave | PointerEvent::Blur => None,
        }
    }
}
