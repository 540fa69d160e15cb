//! Input mapping: raw key and pointer events in, viewer actions out.
//!
//! # Invariants
//! - The viewer consumes `Action`s only, never raw events.
//! - A fresh pointer press never produces a rotation jump from stale coordinates.

pub mod action;
mod bindings;
mod key;
mod mapper;
mod pointer;

pub use action::Action;
pub use bindings::KeyBindings;
pub use key::{InputError, Key, KeyEvent, KeyState};
pub use mapper::{InputEvent, InputMapper};
pub use pointer::{PointerButton, PointerTracker};

pub fn crate_info() -> &'static str {
    "menger-input v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("input"));
    }
}
