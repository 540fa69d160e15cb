/// A high-level viewer command.
///
/// Produced by [`crate::InputMapper`] from raw events; consumed by the viewer state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Zoom along the look direction; positive moves forward.
    KeyZoom(f32),
    /// Pan along the camera's right axis.
    PanHorizontal(f32),
    /// Pan along the camera's up axis.
    PanVertical(f32),
    /// Roll around the look direction.
    Roll(f32),
    /// Switch between orbit and first-person control.
    ToggleCameraMode,
    /// Reset the tracked pointer without rotating.
    SetPointer { x: f32, y: f32 },
    /// Rotate toward a new pointer position.
    Rotate { x: f32, y: f32 },
    /// Drag-zoom toward a new pointer height.
    ScrollZoom { y: f32 },
    /// Change the sponge recursion depth.
    SetNestingLevel(u32),
    /// Flip wireframe overlay on the floor.
    ToggleWireframe,
    /// Adjust the outer tessellation level by a delta.
    OuterLevel(i32),
    /// Adjust the inner tessellation level by a delta.
    InnerLevel(i32),
    /// Launch a tide wave from the current time.
    StartTide,
    /// Close the viewer.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_zoom_is_constructible() {
        let a = Action::KeyZoom(1.0);
        assert!(matches!(a, Action::KeyZoom(d) if d == 1.0));
    }

    #[test]
    fn pointer_actions_carry_coordinates() {
        let a = Action::Rotate { x: 3.0, y: 4.0 };
        assert!(matches!(a, Action::Rotate { x, y } if x == 3.0 && y == 4.0));
        let b = Action::ScrollZoom { y: -1.0 };
        assert_ne!(a, b);
    }

    #[test]
    fn nesting_level_action() {
        assert_eq!(Action::SetNestingLevel(3), Action::SetNestingLevel(3));
        assert_ne!(Action::SetNestingLevel(3), Action::SetNestingLevel(2));
    }
}
