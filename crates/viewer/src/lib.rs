//! Viewer: the single application state a render loop owns.
//!
//! # Invariants
//! - Sponge geometry is regenerated only when its nesting level changed.
//! - Every state change flows through [`ViewerState::apply`].
//! - No process-wide state; the render loop holds one `ViewerState`.

mod config;
mod state;

pub use config::{ViewerConfig, ViewerError};
pub use state::ViewerState;

pub fn crate_info() -> &'static str {
    "menger-viewer v0.1.0"
}
