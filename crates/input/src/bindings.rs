use std::collections::HashMap;

use crate::action::Action;
use crate::key::{Key, KeyEvent};

/// Key → action table.
///
/// Plain bindings fire on press and auto-repeat. Ctrl chords fire once, on
/// release, and take precedence over the plain binding of the same key.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    plain: HashMap<Key, Action>,
    chords: HashMap<Key, Action>,
}

impl KeyBindings {
    /// Table with no bindings.
    pub fn empty() -> Self {
        Self {
            plain: HashMap::new(),
            chords: HashMap::new(),
        }
    }

    /// Bind `key` (without modifiers). Overwrites any previous binding.
    pub fn bind(&mut self, key: Key, action: Action) {
        self.plain.insert(key, action);
    }

    /// Bind `Ctrl + key`. Overwrites any previous chord.
    pub fn bind_ctrl(&mut self, key: Key, action: Action) {
        self.chords.insert(key, action);
    }

    /// Action for a key transition, if any.
    pub fn action_for(&self, event: &KeyEvent) -> Option<Action> {
        if event.ctrl {
            if let Some(action) = self.chords.get(&event.key) {
                return (!event.is_down()).then_some(*action);
            }
        }
        if event.is_down() {
            self.plain.get(&event.key).copied()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.plain.len() + self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut b = Self::empty();
        b.bind(Key::Escape, Action::Quit);
        b.bind(Key::W, Action::KeyZoom(1.0));
        b.bind(Key::S, Action::KeyZoom(-1.0));
        b.bind(Key::A, Action::PanHorizontal(-1.0));
        b.bind(Key::D, Action::PanHorizontal(1.0));
        b.bind(Key::Left, Action::Roll(-1.0));
        b.bind(Key::Right, Action::Roll(1.0));
        b.bind(Key::Down, Action::PanVertical(-1.0));
        b.bind(Key::Up, Action::PanVertical(1.0));
        b.bind(Key::C, Action::ToggleCameraMode);
        b.bind(Key::Minus, Action::OuterLevel(-1));
        b.bind(Key::Equal, Action::OuterLevel(1));
        b.bind(Key::Comma, Action::InnerLevel(-1));
        b.bind(Key::Period, Action::InnerLevel(1));
        b.bind(Key::T, Action::StartTide);
        for level in 0..=4 {
            b.bind(Key::Digit(level), Action::SetNestingLevel(level as u32));
        }
        b.bind_ctrl(Key::F, Action::ToggleWireframe);
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyState;

    #[test]
    fn default_movement_keys() {
        let b = KeyBindings::default();
        assert_eq!(
            b.action_for(&KeyEvent::pressed(Key::W)),
            Some(Action::KeyZoom(1.0))
        );
        assert_eq!(
            b.action_for(&KeyEvent::pressed(Key::A)),
            Some(Action::PanHorizontal(-1.0))
        );
        assert_eq!(
            b.action_for(&KeyEvent::pressed(Key::Right)),
            Some(Action::Roll(1.0))
        );
    }

    #[test]
    fn repeat_fires_release_does_not() {
        let b = KeyBindings::default();
        let repeat = KeyEvent {
            key: Key::Up,
            ctrl: false,
            state: KeyState::Repeated,
        };
        assert_eq!(b.action_for(&repeat), Some(Action::PanVertical(1.0)));
        assert_eq!(b.action_for(&KeyEvent::released(Key::Up)), None);
    }

    #[test]
    fn digits_select_levels_zero_to_four() {
        let b = KeyBindings::default();
        for level in 0..=4u8 {
            assert_eq!(
                b.action_for(&KeyEvent::pressed(Key::Digit(level))),
                Some(Action::SetNestingLevel(level as u32))
            );
        }
        assert_eq!(b.action_for(&KeyEvent::pressed(Key::Digit(5))), None);
    }

    #[test]
    fn ctrl_chord_fires_on_release_only() {
        let b = KeyBindings::default();
        let press = KeyEvent::pressed(Key::F).with_ctrl();
        let release = KeyEvent::released(Key::F).with_ctrl();
        assert_eq!(b.action_for(&press), None);
        assert_eq!(b.action_for(&release), Some(Action::ToggleWireframe));
        assert_eq!(b.action_for(&KeyEvent::released(Key::F)), None);
    }

    #[test]
    fn ctrl_without_chord_falls_back_to_plain() {
        let b = KeyBindings::default();
        let ev = KeyEvent::pressed(Key::W).with_ctrl();
        assert_eq!(b.action_for(&ev), Some(Action::KeyZoom(1.0)));
    }

    #[test]
    fn rebinding_overwrites() {
        let mut b = KeyBindings::empty();
        assert!(b.is_empty());
        b.bind(Key::T, Action::Quit);
        b.bind(Key::T, Action::StartTide);
        assert_eq!(b.len(), 1);
        assert_eq!(
            b.action_for(&KeyEvent::pressed(Key::T)),
            Some(Action::StartTide)
        );
    }
}
