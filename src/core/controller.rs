use crate::camera::CameraMovement;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Escape,
}

impl Button {
    /// Camera translation bound to this button, if any
    pub fn movement(self) -> Option<CameraMovement> {
        match self {
            Button::KeyW => Some(CameraMovement::Forward),
            Button::KeyS => Some(CameraMovement::Backward),
            Button::KeyA => Some(CameraMovement::Left),
            Button::KeyD => Some(CameraMovement::Right),
            _ => None,
        }
    }
}

/// Controller - handles button input states and per-frame pointer/wheel deltas
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];

    /// Pointer motion since the last reset, in screen space (y grows downward)
    fn mouse_delta(&self) -> (f32, f32);

    /// Vertical wheel motion since the last reset, positive away from the user
    fn scroll_delta(&self) -> f32;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_button_hash() {
        let mut set = HashSet::new();
        set.insert(Button::KeyW);
        set.insert(Button::KeyA);
        set.insert(Button::KeyW);

        assert!(set.contains(&Button::KeyW));
        assert!(!set.contains(&Button::KeyS));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_wasd_movement_mapping() {
        assert_eq!(Button::KeyW.movement(), Some(CameraMovement::Forward));
        assert_eq!(Button::KeyS.movement(), Some(CameraMovement::Backward));
        assert_eq!(Button::KeyA.movement(), Some(CameraMovement::Left));
        assert_eq!(Button::KeyD.movement(), Some(CameraMovement::Right));
    }

    #[test]
    fn test_non_movement_buttons() {
        assert_eq!(Button::Escape.movement(), None);
    }

    // Test mock controller implementation
    struct MockController {
        pressed: Vec<Button>,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }

        fn get_down_keys(&self) -> &[Button] {
            &self.pressed
        }

        fn mouse_delta(&self) -> (f32, f32) {
            (0.0, 0.0)
        }

        fn scroll_delta(&self) -> f32 {
            0.0
        }
    }

    #[test]
    fn test_controller_is_down() {
        let controller = MockController {
            pressed: vec![Button::KeyW, Button::KeyD],
        };

        assert!(controller.is_down(Button::KeyW));
        assert!(controller.is_down(Button::KeyD));
        assert!(!controller.is_down(Button::KeyA));
        assert_eq!(controller.get_down_keys().len(), 2);
    }

    #[test]
    fn test_controller_no_keys_pressed() {
        let controller = MockController { pressed: vec![] };

        assert!(!controller.is_down(Button::KeyW));
        assert_eq!(controller.get_down_keys().len(), 0);
        assert_eq!(controller.mouse_delta(), (0.0, 0.0));
    }
}
