use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::bindings::KeyBindings;
use crate::key::KeyEvent;
use crate::pointer::{PointerButton, PointerTracker};

/// Raw input as delivered by a windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    Key(KeyEvent),
    Button { button: PointerButton, pressed: bool },
    Moved { x: f32, y: f32 },
}

/// Stateful translation of [`InputEvent`]s into [`Action`]s.
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    bindings: KeyBindings,
    pointer: PointerTracker,
}

impl InputMapper {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            pointer: PointerTracker::new(),
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn map(&mut self, event: InputEvent) -> Vec<Action> {
        let actions = match event {
            InputEvent::Key(key) => self.bindings.action_for(&key).into_iter().collect(),
            InputEvent::Button { button, pressed } => {
                self.pointer.on_button(button, pressed);
                Vec::new()
            }
            InputEvent::Moved { x, y } => self.pointer.on_move(x, y),
        };
        tracing::trace!(?event, ?actions, "input mapped");
        actions
    }
}
