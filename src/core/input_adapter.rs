use std::collections::HashSet;
use winit::event::{DeviceEvent, ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Pixel wheel deltas (touchpads) are converted to lines with this ratio
const PIXELS_PER_LINE: f32 = 20.0;

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// All pressed buttons as a vec (for efficient get_down_keys)
    pressed_vec: Vec<Button>,
    /// Last cursor position (relative to window)
    mouse_position: Option<(f32, f32)>,
    /// Mouse movement delta since last reset
    mouse_delta: (f32, f32),
    /// Wheel movement since last reset, in lines
    scroll_delta: f32,
    /// Set once raw device motion arrives; cursor positions are then ignored for deltas
    raw_motion: bool,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            pressed_vec: Vec::new(),
            mouse_position: None,
            mouse_delta: (0.0, 0.0),
            scroll_delta: 0.0,
            raw_motion: false,
        }
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set_button(button, event.state);
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };
                self.scroll_delta += lines;
            }
            WindowEvent::Focused(false) => self.focus_lost(),
            _ => {}
        }
    }

    /// Process raw device motion, preferred over cursor positions when the cursor is locked
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.raw_motion = true;
            self.mouse_delta.0 += delta.0 as f32;
            self.mouse_delta.1 += delta.1 as f32;
        }
    }

    /// Reset per-frame state (mouse and scroll deltas)
    /// Call this at the end of each frame after processing input
    pub fn reset_deltas(&mut self) {
        self.mouse_delta = (0.0, 0.0);
        self.scroll_delta = 0.0;
    }

    /// Get current mouse position (if available)
    pub fn mouse_position(&self) -> Option<(f32, f32)> {
        self.mouse_position
    }

    fn set_button(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.pressed_keys.insert(button) {
                    self.pressed_vec.push(button);
                }
            }
            ElementState::Released => {
                if self.pressed_keys.remove(&button) {
                    self.pressed_vec.retain(|&b| b != button);
                }
            }
        }
    }

    // Key releases and cursor motion while unfocused never arrive
    fn focus_lost(&mut self) {
        self.pressed_keys.clear();
        self.pressed_vec.clear();
        self.mouse_position = None;
    }

    // The first sample only primes the position so the view does not jump
    fn cursor_moved(&mut self, x: f32, y: f32) {
        if let Some(old_pos) = self.mouse_position {
            if !self.raw_motion {
                self.mouse_delta.0 += x - old_pos.0;
                self.mouse_delta.1 += y - old_pos.1;
            }
        }
        self.mouse_position = Some((x, y));
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }
}

impl Default for WinitController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }

    fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }
}
