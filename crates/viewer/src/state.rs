use glam::Vec4;
use menger_camera::{OrbitCamera, Projection};
use menger_common::{Mesh, QuadMesh};
use menger_geometry::{MengerSponge, make_floor};
use menger_input::Action;
use menger_render::{FrameUniforms, RenderFrame};

use crate::config::{ViewerConfig, ViewerError};

/// Everything the render loop mutates between frames.
pub struct ViewerState {
    sponge: MengerSponge,
    camera: OrbitCamera,
    mesh: Mesh,
    floor: QuadMesh,
    projection: Projection,
    light_position: Vec4,
    inner_level: u32,
    outer_level: u32,
    wireframe: bool,
    /// Clock value recorded by the last `advance`.
    elapsed: f32,
    tide_start: f32,
    running: bool,
    regenerations: u64,
}

impl ViewerState {
    /// Build the viewer from a validated config.
    ///
    /// The sponge starts dirty: the first [`sync_geometry`](Self::sync_geometry)
    /// call produces the initial mesh.
    pub fn new(config: ViewerConfig) -> Result<Self, ViewerError> {
        config.validate()?;
        let mut sponge = MengerSponge::new(config.bounds);
        sponge.set_nesting_level(config.nesting_level);

        Ok(Self {
            sponge,
            camera: OrbitCamera::default(),
            mesh: Mesh::new(),
            floor: make_floor(&config.floor),
            projection: config.projection,
            light_position: config.light_position,
            inner_level: config.inner_level,
            outer_level: config.outer_level,
            wireframe: false,
            elapsed: 0.0,
            tide_start: 0.0,
            running: true,
            regenerations: 0,
        })
    }

    pub fn sponge(&self) -> &MengerSponge {
        &self.sponge
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    /// Last generated sponge mesh (empty before the first sync).
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn floor(&self) -> &QuadMesh {
        &self.floor
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    pub fn tessellation_levels(&self) -> (u32, u32) {
        (self.inner_level, self.outer_level)
    }

    pub fn tide_start(&self) -> f32 {
        self.tide_start
    }

    /// How many times the sponge mesh has been rebuilt.
    pub fn regenerations(&self) -> u64 {
        self.regenerations
    }

    /// Record the current clock, in seconds since start.
    pub fn advance(&mut self, elapsed: f32) {
        self.elapsed = elapsed;
    }

    /// Apply one action. Returns `false` once the viewer should close.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::KeyZoom(d) => self.camera.zoom_by_key(d),
            Action::PanHorizontal(d) => self.camera.pan_horizontal(d),
            Action::PanVertical(d) => self.camera.pan_vertical(d),
            Action::Roll(d) => self.camera.roll(d),
            Action::ToggleCameraMode => self.camera.toggle_mode(),
            Action::SetPointer { x, y } => self.camera.set_pointer(x, y),
            Action::Rotate { x, y } => self.camera.rotate(x, y),
            Action::ScrollZoom { y } => self.camera.zoom_by_scroll(y),
            Action::SetNestingLevel(level) => self.sponge.set_nesting_level(level),
            Action::ToggleWireframe => {
                self.wireframe = !self.wireframe;
                tracing::debug!(wireframe = self.wireframe, "wireframe toggled");
            }
            Action::OuterLevel(delta) => {
                self.outer_level = self.outer_level.saturating_add_signed(delta);
            }
            Action::InnerLevel(delta) => {
                self.inner_level = self.inner_level.saturating_add_signed(delta);
            }
            Action::StartTide => {
                self.tide_start = self.elapsed;
                tracing::info!(start = self.tide_start, "tide launched");
            }
            Action::Quit => {
                self.running = false;
            }
        }
        self.running
    }

    /// Regenerate the sponge if its level changed and hand the mesh out for upload.
    ///
    /// Returns `None` when the previously returned mesh is still current.
    pub fn sync_geometry(&mut self) -> Option<&Mesh> {
        if !self.sponge.is_dirty() {
            return None;
        }
        self.sponge.generate_into(&mut self.mesh);
        self.sponge.mark_clean();
        self.regenerations += 1;
        tracing::debug!(
            level = self.sponge.nesting_level(),
            faces = self.mesh.face_count(),
            "sponge geometry refreshed"
        );
        Some(&self.mesh)
    }

    /// Uniform values for the current frame.
    pub fn frame(&self, aspect: f32) -> FrameUniforms {
        FrameUniforms {
            view: self.camera.view_matrix(),
            projection: self.projection.matrix(aspect),
            eye: self.camera.eye_position(),
            light_position: self.light_position,
            inner_level: self.inner_level,
            outer_level: self.outer_level,
            elapsed: self.elapsed,
            tide_time: self.elapsed - self.tide_start,
            wireframe: self.wireframe,
        }
    }

    /// Borrow the current geometry alongside `uniforms` for a renderer.
    pub fn render_frame<'a>(&'a self, uniforms: &'a FrameUniforms) -> RenderFrame<'a> {
        RenderFrame {
            sponge: &self.mesh,
            floor: &self.floor,
            uniforms,
            nesting_level: self.sponge.nesting_level(),
        }
    }
}
