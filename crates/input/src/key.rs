use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors from parsing input descriptions.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InputError {
    #[error("unknown key name {0:?}")]
    UnknownKey(String),
}

/// Physical keys the viewer reacts to, independent of any windowing library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "KeyRepr", into = "String")]
pub enum Key {
    W,
    S,
    A,
    D,
    C,
    F,
    T,
    Up,
    Down,
    Left,
    Right,
    Minus,
    Equal,
    Comma,
    Period,
    /// Number row digit, `0..=9`.
    Digit(u8),
    Escape,
}

impl FromStr for Key {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.to_ascii_lowercase().as_str() {
            "w" => Key::W,
            "s" => Key::S,
            "a" => Key::A,
            "d" => Key::D,
            "c" => Key::C,
            "f" => Key::F,
            "t" => Key::T,
            "up" => Key::Up,
            "down" => Key::Down,
            "left" => Key::Left,
            "right" => Key::Right,
            "minus" | "-" => Key::Minus,
            "equal" | "=" => Key::Equal,
            "comma" | "," => Key::Comma,
            "period" | "." => Key::Period,
            "escape" | "esc" => Key::Escape,
            other => match other.as_bytes() {
                [d @ b'0'..=b'9'] => Key::Digit(d - b'0'),
                _ => return Err(InputError::UnknownKey(s.to_string())),
            },
        };
        Ok(key)
    }
}

/// Serialized key: a name, or a bare digit (YAML reads `3` as a number).
#[derive(Deserialize)]
#[serde(untagged)]
enum KeyRepr {
    Digit(u8),
    Name(String),
}

impl TryFrom<KeyRepr> for Key {
    type Error = InputError;

    fn try_from(value: KeyRepr) -> Result<Self, Self::Error> {
        match value {
            KeyRepr::Digit(d) if d <= 9 => Ok(Key::Digit(d)),
            KeyRepr::Digit(d) => Err(InputError::UnknownKey(d.to_string())),
            KeyRepr::Name(name) => name.parse(),
        }
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::W => f.write_str("W"),
            Key::S => f.write_str("S"),
            Key::A => f.write_str("A"),
            Key::D => f.write_str("D"),
            Key::C => f.write_str("C"),
            Key::F => f.write_str("F"),
            Key::T => f.write_str("T"),
            Key::Up => f.write_str("Up"),
            Key::Down => f.write_str("Down"),
            Key::Left => f.write_str("Left"),
            Key::Right => f.write_str("Right"),
            Key::Minus => f.write_str("Minus"),
            Key::Equal => f.write_str("Equal"),
            Key::Comma => f.write_str("Comma"),
            Key::Period => f.write_str("Period"),
            Key::Digit(d) => write!(f, "{d}"),
            Key::Escape => f.write_str("Escape"),
        }
    }
}

/// Key transition as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyState {
    #[default]
    Pressed,
    Repeated,
    Released,
}

/// One key transition with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub state: KeyState,
}

impl KeyEvent {
    pub fn pressed(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            state: KeyState::Pressed,
        }
    }

    pub fn released(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            state: KeyState::Released,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Pressed or auto-repeated.
    pub fn is_down(&self) -> bool {
        self.state != KeyState::Released
    }
}
