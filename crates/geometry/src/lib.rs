//! Geometry core: Menger sponge generation and the tessellated floor grid.
//!
//! # Invariants
//! - Output is a pure function of the generator's bounds and nesting level.
//! - Every emitted box owns its 8 vertices; nothing is shared between boxes.
//! - All box faces wind counter-clockwise when seen from outside.

mod cube;
mod floor;
mod sponge;

pub use cube::{BOX_FACE_COUNT, BOX_VERTEX_COUNT, emit_box};
pub use floor::{FloorConfig, make_floor};
pub use sponge::{
    GeometryError, MAX_NESTING_LEVEL, MengerSponge, SURVIVOR_OFFSETS, box_count,
};

pub fn crate_info() -> &'static str {
    "menger-geometry v0.1.0"
}
