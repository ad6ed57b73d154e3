//! Pointer events delivered by the windowing layer.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Button pressed: starts a stroke.
    Press { position: Point },
    /// Pointer moved with the button held.
    Drag { position: Point },
    /// Button released: ends the stroke.
    Release { position: Point },
}

impl InputEvent {
    pub fn position(&self) -> Point {
        match self {
            InputEvent::Press { position }
            | InputEvent::Drag { position }
            | InputEvent::Release { position } => *position,
        }
    }
}
