use glam::{UVec4, Vec4};
use menger_common::QuadMesh;
use serde::{Deserialize, Serialize};

/// Layout of the square floor grid that the tessellation stage displaces into waves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorConfig {
    /// Lower bound of the grid on both X and Z.
    pub min: f32,
    /// Upper bound of the grid on both X and Z.
    pub max: f32,
    /// Constant Y of the undisplaced grid.
    pub height: f32,
    /// Patches per side.
    pub divisions: u32,
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            min: -20.0,
            max: 20.0,
            height: -2.0,
            divisions: 16,
        }
    }
}

/// Build a `divisions x divisions` grid of quad patches.
pub fn make_floor(config: &FloorConfig) -> QuadMesh {
    let n = config.divisions;
    let side = n + 1;
    let step = (config.max - config.min) / n.max(1) as f32;
    let idx = |x: u32, z: u32| x * side + z;

    let mut vertices = Vec::with_capacity((side * side) as usize);
    for x in 0..=n {
        for z in 0..=n {
            vertices.push(Vec4::new(
                config.min + step * x as f32,
                config.height,
                config.min + step * z as f32,
                1.0,
            ));
        }
    }

    let mut patches = Vec::with_capacity((n * n) as usize);
    for x in 0..n {
        for z in 0..n {
            patches.push(UVec4::new(
                idx(x, z),
                idx(x, z + 1),
                idx(x + 1, z + 1),
                idx(x + 1, z),
            ));
        }
    }

    QuadMesh { vertices, patches }
}
