use serde::{Deserialize, Serialize};

use crate::action::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// Turns button and motion events into camera drag actions.
///
/// Left drag rotates, right drag zooms. The first motion after a press
/// re-anchors the tracked pointer before acting on it.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    button: Option<PointerButton>,
    pressed: bool,
    fresh_click: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_button(&mut self, button: PointerButton, pressed: bool) {
        self.button = Some(button);
        self.pressed = pressed;
        self.fresh_click = true;
    }

    /// Actions for a motion event; empty when no button is held.
    pub fn on_move(&mut self, x: f32, y: f32) -> Vec<Action> {
        if !self.pressed {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(2);
        if self.fresh_click {
            out.push(Action::SetPointer { x, y });
            self.fresh_click = false;
        }
        match self.button {
            Some(PointerButton::Left) => out.push(Action::Rotate { x, y }),
            Some(PointerButton::Right) => out.push(Action::ScrollZoom { y }),
            _ => {}
        }
        out
    }

    pub fn is_dragging(&self) -> bool {
        self.pressed
    }
}
