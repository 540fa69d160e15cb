use glam::Vec3;
use menger_common::{Aabb, Mesh};

use crate::cube::{BOX_FACE_COUNT, BOX_VERTEX_COUNT, emit_box};

/// Deepest supported subdivision. Level 4 already emits 160 000 boxes.
pub const MAX_NESTING_LEVEL: u32 = 4;

/// Sub-cells kept from each 3x3x3 partition, as `(x, y, z)` cell offsets.
///
/// The body center and the six face centers are absent. Order is part of the
/// output contract: children are emitted in exactly this sequence.
#[rustfmt::skip]
pub const SURVIVOR_OFFSETS: [[u8; 3]; 20] = [
    // bottom layer: ring of 8
    [0, 0, 0], [1, 0, 0], [2, 0, 0],
    [0, 0, 1], [2, 0, 1],
    [0, 0, 2], [1, 0, 2], [2, 0, 2],
    // middle layer: 4 vertical edges
    [0, 1, 0], [0, 1, 2], [2, 1, 2], [2, 1, 0],
    // top layer: ring of 8
    [0, 2, 0], [1, 2, 0], [2, 2, 0],
    [0, 2, 1], [2, 2, 1],
    [0, 2, 2], [1, 2, 2], [2, 2, 2],
];

/// Number of boxes emitted at `level`: `20^level`.
pub fn box_count(level: u32) -> usize {
    SURVIVOR_OFFSETS.len().pow(level)
}

#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("malformed bounds: min {min} must be below max {max} on every axis")]
    InvalidBounds { min: Vec3, max: Vec3 },
}

/// Menger sponge generator over a fixed bounding box.
///
/// Holds the nesting level and a dirty flag. The flag is raised on every level
/// change and lowered only by the caller once it has consumed fresh geometry.
#[derive(Debug, Clone)]
pub struct MengerSponge {
    bounds: Aabb,
    nesting_level: u32,
    dirty: bool,
}

impl MengerSponge {
    /// Create a level-0 sponge. Starts dirty so the first frame uploads geometry.
    ///
    /// Malformed bounds are accepted and produce a degenerate mesh with the
    /// usual vertex and face counts; use [`MengerSponge::try_new`] to reject them.
    pub fn new(bounds: Aabb) -> Self {
        Self {
            bounds,
            nesting_level: 0,
            dirty: true,
        }
    }

    /// Create a sponge, rejecting bounds with `min >= max` on any axis.
    pub fn try_new(bounds: Aabb) -> Result<Self, GeometryError> {
        if !bounds.is_well_formed() {
            return Err(GeometryError::InvalidBounds {
                min: bounds.min,
                max: bounds.max,
            });
        }
        Ok(Self::new(bounds))
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub fn nesting_level(&self) -> u32 {
        self.nesting_level
    }

    /// Set the nesting level and mark the geometry stale.
    ///
    /// Levels above [`MAX_NESTING_LEVEL`] are clamped.
    pub fn set_nesting_level(&mut self, level: u32) {
        if level > MAX_NESTING_LEVEL {
            tracing::warn!(
                requested = level,
                max = MAX_NESTING_LEVEL,
                "nesting level out of range, clamping"
            );
        }
        self.nesting_level = level.min(MAX_NESTING_LEVEL);
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Edge vector of a single box at the current level.
    pub fn cell_size(&self) -> Vec3 {
        self.bounds.size() / 3f32.powi(self.nesting_level as i32)
    }

    /// Minimum corners of every surviving cell, in emission order.
    ///
    /// Expanded breadth-first: each pass replaces every corner with the 20
    /// survivor corners of its 3x3x3 partition.
    pub fn cell_minimums(&self) -> Vec<Vec3> {
        let mut current = vec![self.bounds.min];
        for i in 1..=self.nesting_level {
            let w = self.bounds.size() / 3f32.powi(i as i32);
            let mut next = Vec::with_capacity(current.len() * SURVIVOR_OFFSETS.len());
            for corner in &current {
                next.extend(SURVIVOR_OFFSETS.iter().map(|&[x, y, z]| {
                    *corner + Vec3::new(x as f32, y as f32, z as f32) * w
                }));
            }
            current = next;
        }
        current
    }

    /// Build the sponge mesh for the current state.
    pub fn generate_geometry(&self) -> Mesh {
        let mut mesh = Mesh::new();
        self.generate_into(&mut mesh);
        mesh
    }

    /// Clear `mesh` and fill it with the sponge at the current level.
    pub fn generate_into(&self, mesh: &mut Mesh) {
        let _span = tracing::info_span!("generate_sponge", level = self.nesting_level).entered();
        mesh.clear();

        if self.nesting_level == 0 {
            emit_box(mesh, self.bounds.min, self.bounds.max);
            return;
        }

        let boxes = box_count(self.nesting_level);
        mesh.vertices.reserve(boxes * BOX_VERTEX_COUNT);
        mesh.faces.reserve(boxes * BOX_FACE_COUNT);

        let d = self.cell_size();
        for min in self.cell_minimums() {
            emit_box(mesh, min, min + d);
        }

        tracing::debug!(
            boxes,
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            "sponge generated"
        );
    }
}
