use glam::Vec4;
use menger_camera::Projection;
use menger_common::Aabb;
use menger_geometry::{FloorConfig, GeometryError, MAX_NESTING_LEVEL, MengerSponge};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("nesting level {level} exceeds maximum {max}")]
    LevelOutOfRange { level: u32, max: u32 },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Startup configuration. Every field has a default, so partial files are fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Outer box of the sponge.
    pub bounds: Aabb,
    /// Level the sponge starts at.
    pub nesting_level: u32,
    pub floor: FloorConfig,
    pub projection: Projection,
    pub light_position: Vec4,
    pub inner_level: u32,
    pub outer_level: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            bounds: Aabb::default(),
            nesting_level: 0,
            floor: FloorConfig::default(),
            projection: Projection::default(),
            light_position: Vec4::new(-10.0, 10.0, 0.0, 1.0),
            inner_level: 0,
            outer_level: 0,
        }
    }
}

impl ViewerConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(s: &str) -> Result<Self, ViewerError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject malformed bounds and unsupported nesting levels.
    pub fn validate(&self) -> Result<(), ViewerError> {
        MengerSponge::try_new(self.bounds)?;
        if self.nesting_level > MAX_NESTING_LEVEL {
            return Err(ViewerError::LevelOutOfRange {
                level: self.nesting_level,
                max: MAX_NESTING_LEVEL,
            });
        }
        Ok(())
    }
}
