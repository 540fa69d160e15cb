use glam::{UVec3, UVec4, Vec4};

use crate::Aabb;

/// Indexed triangle mesh with homogeneous vertex positions.
///
/// No vertex sharing is implied: two faces may reference distinct vertices
/// that happen to coincide in space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vec4>,
    pub faces: Vec<UVec3>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize, faces: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            faces: Vec::with_capacity(faces),
        }
    }

    /// Drop all vertices and faces, keeping allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.faces.clear();
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Raw vertex bytes, four `f32` per vertex, ready for a vertex buffer.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes, three `u32` per face, ready for an index buffer.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.faces)
    }

    /// Number of indices to draw (three per triangle).
    pub fn index_count(&self) -> u32 {
        (self.faces.len() * 3) as u32
    }

    /// Bounding box of all vertices, `None` when empty.
    pub fn bounds(&self) -> Option<Aabb> {
        let first = self.vertices.first()?.truncate();
        let init = Aabb::new(first, first);
        Some(self.vertices.iter().fold(init, |acc, v| {
            let p = v.truncate();
            Aabb::new(acc.min.min(p), acc.max.max(p))
        }))
    }

    /// True when every face index refers to an existing vertex.
    pub fn indices_in_range(&self) -> bool {
        let n = self.vertices.len() as u32;
        self.faces
            .iter()
            .all(|f| f.x < n && f.y < n && f.z < n)
    }
}

/// Mesh of four-vertex patches, consumed by a tessellation stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuadMesh {
    pub vertices: Vec<Vec4>,
    pub patches: Vec<UVec4>,
}

impl QuadMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn patch_count(&self) -> usize {
        self.patches.len()
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.patches)
    }

    pub fn index_count(&self) -> u32 {
        (self.patches.len() * 4) as u32
    }

    pub fn indices_in_range(&self) -> bool {
        let n = self.vertices.len() as u32;
        self.patches.iter().all(|p| p.cmplt(UVec4::splat(n)).all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn triangle() -> Mesh {
        Mesh {
            vertices: vec![
                Vec4::new(0.0, 0.0, 0.0, 1.0),
                Vec4::new(1.0, 0.0, 0.0, 1.0),
                Vec4::new(0.0, 2.0, -1.0, 1.0),
            ],
            faces: vec![UVec3::new(0, 1, 2)],
        }
    }

    #[test]
    fn byte_views_match_element_sizes() {
        let mesh = triangle();
        assert_eq!(mesh.vertex_bytes().len(), 3 * 16);
        assert_eq!(mesh.index_bytes().len(), 12);
        assert_eq!(mesh.index_count(), 3);
    }

    #[test]
    fn bounds_cover_all_vertices() {
        let b = triangle().bounds().unwrap();
        assert_eq!(b.min, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(b.max, Vec3::new(1.0, 2.0, 0.0));
        assert!(Mesh::new().bounds().is_none());
    }

    #[test]
    fn out_of_range_index_detected() {
        let mut mesh = triangle();
        assert!(mesh.indices_in_range());
        mesh.faces.push(UVec3::new(0, 1, 3));
        assert!(!mesh.indices_in_range());
    }

    #[test]
    fn clear_empties_mesh() {
        let mut mesh = triangle();
        mesh.clear();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
    }
}
