//! Shared plain-data types passed between the geometry core and its callers.
//!
//! # Invariants
//! - Every index stored in a `Mesh` face or `QuadMesh` patch is `< vertex_count`.
//! - Vertices are homogeneous points with `w = 1`.

mod mesh;
mod types;

pub use mesh::{Mesh, QuadMesh};
pub use types::Aabb;

pub fn crate_info() -> &'static str {
    "menger-common v0.1.0"
}
