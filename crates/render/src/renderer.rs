use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};
use menger_common::{Mesh, QuadMesh};

/// Per-frame values fed to the sponge and floor shader programs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub view: Mat4,
    pub projection: Mat4,
    pub eye: Vec3,
    pub light_position: Vec4,
    pub inner_level: u32,
    pub outer_level: u32,
    /// Seconds since the viewer started.
    pub elapsed: f32,
    /// Seconds since the last tide was launched.
    pub tide_time: f32,
    pub wireframe: bool,
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            eye: Vec3::ZERO,
            light_position: Vec4::new(-10.0, 10.0, 0.0, 1.0),
            inner_level: 0,
            outer_level: 0,
            elapsed: 0.0,
            tide_time: 0.0,
            wireframe: false,
        }
    }
}

/// `FrameUniforms` laid out for a uniform buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct GpuUniforms {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub eye: [f32; 4],
    pub light_position: [f32; 4],
    pub inner_level: u32,
    pub outer_level: u32,
    pub elapsed: f32,
    pub tide_time: f32,
    pub wireframe: u32,
    pub _pad: [u32; 3],
}

impl From<&FrameUniforms> for GpuUniforms {
    fn from(u: &FrameUniforms) -> Self {
        Self {
            view: u.view.to_cols_array_2d(),
            projection: u.projection.to_cols_array_2d(),
            eye: u.eye.extend(1.0).to_array(),
            light_position: u.light_position.to_array(),
            inner_level: u.inner_level,
            outer_level: u.outer_level,
            elapsed: u.elapsed,
            tide_time: u.tide_time,
            wireframe: u32::from(u.wireframe),
            _pad: [0; 3],
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame<'a> {
    pub sponge: &'a Mesh,
    pub floor: &'a QuadMesh,
    pub uniforms: &'a FrameUniforms,
    /// Nesting level the sponge mesh was generated at.
    pub nesting_level: u32,
}

/// Renderer-agnostic interface. All renderers implement this trait.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, frame: &RenderFrame<'_>) -> Self::Output;
}

/// Human-readable frame dump, used by the CLI and in tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &RenderFrame<'_>) -> String {
        let u = frame.uniforms;
        let mut out = String::new();
        out.push_str(&format!(
            "=== Frame (t={:.2}s, tide={:.2}s) ===\n",
            u.elapsed, u.tide_time
        ));
        out.push_str(&format!(
            "Sponge: level={} vertices={} triangles={}\n",
            frame.nesting_level,
            frame.sponge.vertex_count(),
            frame.sponge.face_count()
        ));
        if let Some(b) = frame.sponge.bounds() {
            out.push_str(&format!(
                "  bounds=({:.3}, {:.3}, {:.3})..({:.3}, {:.3}, {:.3})\n",
                b.min.x, b.min.y, b.min.z, b.max.x, b.max.y, b.max.z
            ));
        }
        out.push_str(&format!(
            "Floor: vertices={} patches={} tess=(inner {}, outer {}) wireframe={}\n",
            frame.floor.vertex_count(),
            frame.floor.patch_count(),
            u.inner_level,
            u.outer_level,
            if u.wireframe { "on" } else { "off" }
        ));
        out.push_str(&format!(
            "Camera: eye=({:.3}, {:.3}, {:.3})\n",
            u.eye.x, u.eye.y, u.eye.z
        ));
        for row in 0..4 {
            let r = u.view.row(row);
            out.push_str(&format!(
                "  view[{row}] = [{:>8.4} {:>8.4} {:>8.4} {:>8.4}]\n",
                r.x, r.y, r.z, r.w
            ));
        }
        out
    }
}
