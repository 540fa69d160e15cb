use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Which point rotations pivot around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraMode {
    /// Eye circles a fixed center.
    #[default]
    Orbit,
    /// Look direction swings around a fixed eye.
    FirstPerson,
}

impl CameraMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Orbit => Self::FirstPerson,
            Self::FirstPerson => Self::Orbit,
        }
    }
}

/// Per-call step sizes for each control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSpeeds {
    /// World units per pan step.
    pub pan: f32,
    /// Radians per roll step.
    pub roll: f32,
    /// Radians per pointer pixel.
    pub rotation: f32,
    /// World units per zoom step or pointer pixel.
    pub zoom: f32,
}

impl CameraSpeeds {
    pub const DEFAULT: Self = Self {
        pan: 0.1,
        roll: 0.1,
        rotation: 0.02,
        zoom: 0.1,
    };
}

impl Default for CameraSpeeds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const INITIAL_DISTANCE: f32 = 3.0;

/// Camera driven by incremental pointer and key input.
///
/// Keeps an explicit orthonormal frame (`look`, `up`, `right`) plus an eye
/// and a center. In orbit mode rotations move the eye around the center; in
/// first-person mode they swing the center around the eye.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    mode: CameraMode,
    eye: Vec3,
    center: Vec3,
    look: Vec3,
    up: Vec3,
    right: Vec3,
    distance: f32,
    last_pointer: Vec2,
    speeds: CameraSpeeds,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            mode: CameraMode::Orbit,
            eye: Vec3::new(0.0, 0.0, INITIAL_DISTANCE),
            center: Vec3::ZERO,
            look: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            distance: INITIAL_DISTANCE,
            last_pointer: Vec2::ZERO,
            speeds: CameraSpeeds::DEFAULT,
        }
    }
}

/// Right-handed rotation of `v` by `angle` radians about the unit `axis`.
fn rotate_about(v: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    Quat::from_axis_angle(axis, angle) * v
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn eye_position(&self) -> Vec3 {
        self.eye
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn look(&self) -> Vec3 {
        self.look
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn last_pointer(&self) -> Vec2 {
        self.last_pointer
    }

    pub fn speeds(&self) -> CameraSpeeds {
        self.speeds
    }

    /// Switch between orbit and first-person without touching the pose.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        tracing::debug!(mode = ?self.mode, "camera mode toggled");
    }

    /// Record the pointer position without rotating.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.last_pointer = Vec2::new(x, y);
    }

    /// Rotate by the pointer delta since the last recorded position.
    ///
    /// Horizontal motion turns about `up`, vertical motion about `right`.
    pub fn rotate(&mut self, x: f32, y: f32) {
        let pointer = Vec2::new(x, y);
        let delta = pointer - self.last_pointer;
        self.last_pointer = pointer;

        let yaw = delta.x * self.speeds.rotation;
        let pitch = delta.y * self.speeds.rotation;

        match self.mode {
            CameraMode::FirstPerson => {
                self.look = rotate_about(self.look, self.up, yaw);
                self.right = self.look.cross(self.up).normalize();
                self.look = rotate_about(self.look, self.right, pitch);
                self.up = self.look.cross(-self.right).normalize();
                self.center = self.eye + self.distance * self.look;
            }
            CameraMode::Orbit => {
                self.eye = self.center + rotate_about(self.eye - self.center, self.up, yaw);
                self.look = self.center - self.eye;
                self.right = self.look.cross(self.up).normalize();
                self.eye = self.center + rotate_about(self.eye - self.center, self.right, pitch);
                self.look = self.center - self.eye;
                self.up = self.look.cross(-self.right).normalize();
            }
        }
        self.orthonormalize();
    }

    /// Spin `up` around `look`. Positive rolls clockwise as seen by the viewer.
    pub fn roll(&mut self, direction: f32) {
        self.up = rotate_about(self.up, self.look, direction * self.speeds.roll).normalize();
        self.right = self.look.cross(self.up).normalize();
        self.orthonormalize();
    }

    /// Slide eye and center together along `right`.
    pub fn pan_horizontal(&mut self, direction: f32) {
        let offset = self.right * self.speeds.pan * direction;
        self.eye += offset;
        self.center += offset;
    }

    /// Slide eye and center together along `up`.
    pub fn pan_vertical(&mut self, direction: f32) {
        let offset = self.up * self.speeds.pan * direction;
        self.eye += offset;
        self.center += offset;
    }

    /// Drag-zoom: move the eye along `look` by the vertical pointer delta.
    ///
    /// Only the tracked Y coordinate is updated.
    pub fn zoom_by_scroll(&mut self, y: f32) {
        self.eye += self.look * (self.speeds.zoom * (self.last_pointer.y - y));
        self.distance = self.center.distance(self.eye);
        self.last_pointer.y = y;
    }

    /// Keyboard zoom: dolly in first-person, approach the center in orbit.
    pub fn zoom_by_key(&mut self, direction: f32) {
        let step = self.look * self.speeds.zoom * direction;
        match self.mode {
            CameraMode::FirstPerson => {
                self.eye += step;
                self.center += step;
            }
            CameraMode::Orbit => {
                self.distance = self.center.distance(self.eye) - self.speeds.zoom * direction;
                self.eye += step;
            }
        }
    }

    /// Right-handed view matrix built from `eye`, `look` and `up`.
    ///
    /// The camera basis (X, Y, Z with Z = -look) forms the rotation rows; the
    /// last column carries the eye translation expressed in that basis.
    pub fn view_matrix(&self) -> Mat4 {
        let z = -self.look.normalize();
        let x = self.up.cross(z).normalize();
        let y = z.cross(x).normalize();
        Mat4::from_cols(
            Vec4::new(x.x, y.x, z.x, 0.0),
            Vec4::new(x.y, y.y, z.y, 0.0),
            Vec4::new(x.z, y.z, z.z, 0.0),
            Vec4::new(-x.dot(self.eye), -y.dot(self.eye), -z.dot(self.eye), 1.0),
        )
    }

    /// Re-derive `right` and `up` from `look` so accumulated error never builds up.
    fn orthonormalize(&mut self) {
        self.look = self.look.normalize();
        self.right = self.look.cross(self.up).normalize();
        self.up = self.right.cross(self.look).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn assert_orthonormal(cam: &OrbitCamera) {
        for v in [cam.look(), cam.up(), cam.right()] {
            assert!((v.length() - 1.0).abs() < EPS, "length {}", v.length());
        }
        assert!(cam.look().dot(cam.up()).abs() < EPS);
        assert!(cam.look().dot(cam.right()).abs() < EPS);
        assert!(cam.up().dot(cam.right()).abs() < EPS);
    }

    /// Deterministic pseudo-random pointer walk mixed with rolls.
    fn jitter(cam: &mut OrbitCamera, steps: usize) {
        let mut x = 0.0_f32;
        let mut y = 0.0_f32;
        for i in 0..steps {
            x += ((i * 37 % 23) as f32) - 11.0;
            y += ((i * 53 % 19) as f32) - 9.0;
            cam.rotate(x, y);
            if i % 7 == 0 {
                cam.roll(if i % 2 == 0 { 1.0 } else { -1.0 });
            }
        }
    }

    #[test]
    fn default_pose() {
        let cam = OrbitCamera::default();
        assert_eq!(cam.mode(), CameraMode::Orbit);
        assert_eq!(cam.eye_position(), Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(cam.center(), Vec3::ZERO);
        assert_eq!(cam.distance(), 3.0);
        assert_orthonormal(&cam);
    }

    #[test]
    fn orbit_rotation_stays_orthonormal() {
        let mut cam = OrbitCamera::default();
        jitter(&mut cam, 500);
        assert_orthonormal(&cam);
    }

    #[test]
    fn first_person_rotation_stays_orthonormal() {
        let mut cam = OrbitCamera::default();
        cam.toggle_mode();
        jitter(&mut cam, 500);
        assert_orthonormal(&cam);
    }

    #[test]
    fn orbit_rotation_keeps_center_and_radius() {
        let mut cam = OrbitCamera::default();
        cam.rotate(30.0, -12.0);
        assert_eq!(cam.center(), Vec3::ZERO);
        assert!((cam.eye_position().length() - 3.0).abs() < EPS);
        let to_center = (cam.center() - cam.eye_position()).normalize();
        assert!(to_center.abs_diff_eq(cam.look(), EPS));
    }

    #[test]
    fn orbit_rotation_pivots_on_moved_center() {
        let mut cam = OrbitCamera::default();
        cam.pan_horizontal(10.0);
        let center = cam.center();
        cam.rotate(40.0, 15.0);
        assert_eq!(cam.center(), center);
        assert!((cam.eye_position().distance(center) - 3.0).abs() < EPS);
    }

    #[test]
    fn first_person_rotation_keeps_eye() {
        let mut cam = OrbitCamera::default();
        cam.toggle_mode();
        let eye = cam.eye_position();
        cam.rotate(25.0, 10.0);
        assert_eq!(cam.eye_position(), eye);
        let expected_center = eye + cam.distance() * cam.look();
        assert!(cam.center().abs_diff_eq(expected_center, EPS));
    }

    #[test]
    fn horizontal_drag_yaws_about_up() {
        let mut cam = OrbitCamera::default();
        cam.toggle_mode();
        cam.rotate(10.0, 0.0);
        let angle = 10.0 * CameraSpeeds::DEFAULT.rotation;
        let expected = Quat::from_axis_angle(Vec3::Y, angle) * Vec3::NEG_Z;
        assert!(cam.look().abs_diff_eq(expected, EPS));
        assert!(cam.up().abs_diff_eq(Vec3::Y, EPS));
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut cam = OrbitCamera::default();
        jitter(&mut cam, 20);
        let before = cam.clone();
        cam.toggle_mode();
        assert_eq!(cam.mode(), CameraMode::FirstPerson);
        assert_eq!(cam.eye_position(), before.eye_position());
        cam.toggle_mode();
        assert_eq!(cam, before);
    }

    #[test]
    fn set_pointer_then_rotate_is_noop() {
        for first_person in [false, true] {
            let mut cam = OrbitCamera::default();
            if first_person {
                cam.toggle_mode();
            }
            cam.rotate(5.0, 8.0);
            let before = cam.clone();
            cam.set_pointer(120.0, -40.0);
            cam.rotate(120.0, -40.0);
            assert!(cam.look().abs_diff_eq(before.look(), 1e-6));
            assert!(cam.up().abs_diff_eq(before.up(), 1e-6));
            assert!(cam.eye_position().abs_diff_eq(before.eye_position(), 1e-6));
        }
    }

    #[test]
    fn roll_turns_up_about_look() {
        let mut cam = OrbitCamera::default();
        cam.roll(1.0);
        assert!(cam.look().abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!(cam.up().dot(Vec3::Y) < 1.0);
        let expected = Quat::from_axis_angle(Vec3::NEG_Z, CameraSpeeds::DEFAULT.roll) * Vec3::Y;
        assert!(cam.up().abs_diff_eq(expected, EPS));
        assert_orthonormal(&cam);
    }

    #[test]
    fn pan_moves_eye_and_center_together() {
        let mut cam = OrbitCamera::default();
        let look = cam.look();
        cam.pan_horizontal(1.0);
        assert!(cam.eye_position().abs_diff_eq(Vec3::new(0.1, 0.0, 3.0), EPS));
        assert!(cam.center().abs_diff_eq(Vec3::new(0.1, 0.0, 0.0), EPS));
        cam.pan_vertical(-2.0);
        assert!(cam.center().abs_diff_eq(Vec3::new(0.1, -0.2, 0.0), EPS));
        assert_eq!(cam.look(), look);
    }

    #[test]
    fn key_zoom_in_orbit_approaches_center() {
        let mut cam = OrbitCamera::default();
        let d0 = cam.distance();
        cam.zoom_by_key(1.0);
        assert!((cam.distance() - (d0 - CameraSpeeds::DEFAULT.zoom)).abs() < EPS);
        assert_eq!(cam.center(), Vec3::ZERO);
        assert!(cam.eye_position().abs_diff_eq(Vec3::new(0.0, 0.0, 2.9), EPS));
    }

    #[test]
    fn key_zoom_in_first_person_dollies() {
        let mut cam = OrbitCamera::default();
        cam.toggle_mode();
        let d0 = cam.distance();
        cam.zoom_by_key(-2.0);
        assert!(cam.eye_position().abs_diff_eq(Vec3::new(0.0, 0.0, 3.2), EPS));
        assert!(cam.center().abs_diff_eq(Vec3::new(0.0, 0.0, 0.2), EPS));
        assert_eq!(cam.distance(), d0);
    }

    #[test]
    fn scroll_zoom_tracks_only_y() {
        let mut cam = OrbitCamera::default();
        cam.set_pointer(7.0, 10.0);
        cam.zoom_by_scroll(5.0);
        assert!(cam.eye_position().abs_diff_eq(Vec3::new(0.0, 0.0, 2.5), EPS));
        assert!((cam.distance() - 2.5).abs() < EPS);
        assert_eq!(cam.last_pointer(), Vec2::new(7.0, 5.0));
    }

    #[test]
    fn view_matrix_matches_glam_look_to() {
        let mut cam = OrbitCamera::default();
        jitter(&mut cam, 40);
        cam.pan_vertical(3.0);
        let expected = Mat4::look_to_rh(cam.eye_position(), cam.look(), cam.up());
        assert!(cam.view_matrix().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn default_view_puts_center_in_front() {
        let cam = OrbitCamera::default();
        let p = cam.view_matrix() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(p.abs_diff_eq(Vec4::new(0.0, 0.0, -3.0, 1.0), EPS));
    }
}
