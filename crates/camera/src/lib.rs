//! Camera: orbit and first-person control schemes over one orthonormal frame.
//!
//! # Invariants
//! - `look`, `up`, `right` are unit length and pairwise orthogonal after every
//!   mutating call; the frame is re-derived from fresh cross products each time.
//! - Switching modes never moves the camera.

mod orbit;
mod projection;

pub use orbit::{CameraMode, CameraSpeeds, OrbitCamera};
pub use projection::Projection;

pub fn crate_info() -> &'static str {
    "menger-camera v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("camera"));
    }
}
