//! Per-frame camera update.
//!
//! Input is collected into a plain [`FrameInput`] value and applied to an owned
//! [`Camera`]; nothing here reads global state, so a frame can be replayed in tests.

use crate::camera::{Camera, CameraMovement};
use crate::core::controller::Controller;

/// One frame worth of camera input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Seconds since the previous frame
    pub elapsed_seconds: f32,
    /// Held translation directions, applied in order
    pub movements: Vec<CameraMovement>,
    /// Pointer delta with positive y meaning "look up"
    pub look_delta: (f32, f32),
    /// Wheel delta, positive zooms in
    pub scroll_delta: f32,
}

impl FrameInput {
    pub fn new(elapsed_seconds: f32) -> Self {
        Self {
            elapsed_seconds,
            ..Self::default()
        }
    }

    pub fn with_movement(mut self, movement: CameraMovement) -> Self {
        self.movements.push(movement);
        self
    }

    pub fn with_look(mut self, x_delta: f32, y_delta: f32) -> Self {
        self.look_delta = (x_delta, y_delta);
        self
    }

    pub fn with_scroll(mut self, scroll_delta: f32) -> Self {
        self.scroll_delta = scroll_delta;
        self
    }

    /// Snapshot a controller. Screen-space pointer y grows downward, so it is flipped here.
    pub fn from_controller<C: Controller>(controller: &C, elapsed_seconds: f32) -> Self {
        let (mouse_x, mouse_y) = controller.mouse_delta();
        Self {
            elapsed_seconds,
            movements: controller
                .get_down_keys()
                .iter()
                .filter_map(|button| button.movement())
                .collect(),
            look_delta: (mouse_x, -mouse_y),
            scroll_delta: controller.scroll_delta(),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.movements.is_empty() && self.look_delta == (0.0, 0.0) && self.scroll_delta == 0.0
    }
}

/// Apply look, then zoom, then movement, so translation uses this frame's basis
pub fn apply_frame_input(camera: &mut Camera, input: &FrameInput) {
    let (x_delta, y_delta) = input.look_delta;
    if x_delta != 0.0 || y_delta != 0.0 {
        camera.process_look_constrained(x_delta, y_delta);
    }

    if input.scroll_delta != 0.0 {
        camera.process_zoom(input.scroll_delta);
    }

    for &movement in &input.movements {
        camera.process_movement(movement, input.elapsed_seconds);
    }
}
