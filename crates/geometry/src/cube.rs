use glam::{UVec3, Vec3};
use menger_common::Mesh;

/// Vertices appended by a single [`emit_box`] call.
pub const BOX_VERTEX_COUNT: usize = 8;
/// Triangles appended by a single [`emit_box`] call.
pub const BOX_FACE_COUNT: usize = 12;

/// Corner `i` has bit 2 = x, bit 1 = y, bit 0 = z (0 selects min, 1 selects max).
#[rustfmt::skip]
const BOX_TRIANGLES: [[u32; 3]; BOX_FACE_COUNT] = [
    [0, 1, 3], [0, 3, 2], // -X
    [0, 5, 1], [0, 4, 5], // -Y
    [0, 6, 4], [0, 2, 6], // -Z
    [7, 1, 5], [7, 3, 1], // +Z
    [7, 5, 4], [7, 4, 6], // +X
    [7, 6, 2], [7, 2, 3], // +Y
];

/// Append a closed box spanning `min..max` to `mesh`.
///
/// Always pushes 8 fresh vertices and 12 outward-facing triangles, indexed
/// relative to the mesh's current vertex count.
pub fn emit_box(mesh: &mut Mesh, min: Vec3, max: Vec3) {
    let base = mesh.vertices.len() as u32;
    for corner in 0..BOX_VERTEX_COUNT {
        let pick = |bit: usize, lo: f32, hi: f32| if corner & bit == 0 { lo } else { hi };
        mesh.vertices.push(glam::Vec4::new(
            pick(4, min.x, max.x),
            pick(2, min.y, max.y),
            pick(1, min.z, max.z),
            1.0,
        ));
    }
    mesh.faces.extend(
        BOX_TRIANGLES
            .iter()
            .map(|[a, b, c]| UVec3::new(base + a, base + b, base + c)),
    );
}
