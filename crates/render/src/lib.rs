//! Rendering Adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers read geometry and uniforms; they never mutate viewer state.
//! - Geometry buffers are re-uploaded only when the viewer hands out a fresh mesh.
//!
//! Ships a debug text renderer; a GPU backend implements the same trait
//! and uploads `GpuUniforms` plus the mesh byte views.

mod renderer;

pub use renderer::{DebugTextRenderer, FrameUniforms, GpuUniforms, RenderFrame, Renderer};

pub fn crate_info() -> &'static str {
    "menger-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
