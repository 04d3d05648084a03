use glam::{Mat4, Vec3};

use crate::types::CameraUniform;

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_MOVEMENT_SPEED: f32 = 2.5;
pub const DEFAULT_LOOK_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_ZOOM: f32 = 45.0;

/// Pitch limit in degrees, keeps `front` away from `world_up`
pub const PITCH_LIMIT: f32 = 89.0;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 45.0;

pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

/// Direction selector for keyboard driven translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

impl CameraMovement {
    pub const ALL: [CameraMovement; 4] = [
        CameraMovement::Forward,
        CameraMovement::Backward,
        CameraMovement::Left,
        CameraMovement::Right,
    ];
}

/// Free-look camera driven by yaw/pitch in degrees.
///
/// The basis (`front`, `right`, `up`) is derived state: it is rebuilt from the angles and
/// `world_up` every time the angles change, never rotated incrementally.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    movement_speed: f32,
    look_sensitivity: f32,
    zoom: f32,
}

impl Camera {
    /// Create a camera and derive its basis immediately
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            world_up,
            yaw,
            pitch,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: world_up,
            movement_speed: DEFAULT_MOVEMENT_SPEED,
            look_sensitivity: DEFAULT_LOOK_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
        };
        camera.update_basis();
        camera
    }

    /// Same as [`Camera::new`] with plain scalars
    #[allow(clippy::too_many_arguments)]
    pub fn from_scalars(
        pos_x: f32,
        pos_y: f32,
        pos_z: f32,
        up_x: f32,
        up_y: f32,
        up_z: f32,
        yaw: f32,
        pitch: f32,
    ) -> Self {
        Self::new(
            Vec3::new(pos_x, pos_y, pos_z),
            Vec3::new(up_x, up_y, up_z),
            yaw,
            pitch,
        )
    }

    pub fn with_movement_speed(mut self, speed: f32) -> Self {
        self.movement_speed = speed;
        self
    }

    pub fn with_look_sensitivity(mut self, sensitivity: f32) -> Self {
        self.look_sensitivity = sensitivity;
        self
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Teleport without touching the orientation
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Yaw wrapped into [0, 360) for display. Stored yaw stays unbounded.
    pub fn display_yaw(&self) -> f32 {
        let wrapped = self.yaw.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        if wrapped >= 360.0 {
            0.0
        } else {
            wrapped
        }
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Vertical field of view in degrees
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn set_movement_speed(&mut self, speed: f32) {
        self.movement_speed = speed;
    }

    pub fn look_sensitivity(&self) -> f32 {
        self.look_sensitivity
    }

    pub fn set_look_sensitivity(&mut self, sensitivity: f32) {
        self.look_sensitivity = sensitivity;
    }

    /// Right-handed look-at transform from `position` towards `position + front`
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// OpenGL-style perspective built from the current zoom
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        let aspect = if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
            aspect_ratio
        } else {
            1.0
        };
        Mat4::perspective_rh_gl(self.zoom.to_radians(), aspect, NEAR_PLANE, FAR_PLANE)
    }

    /// Translate along the basis, scaled by elapsed time so speed is frame-rate independent.
    /// Non-finite elapsed times are ignored.
    pub fn process_movement(&mut self, direction: CameraMovement, elapsed_seconds: f32) {
        let velocity = self.movement_speed * elapsed_seconds;
        if !velocity.is_finite() {
            return;
        }
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Apply pointer deltas to yaw/pitch.
    ///
    /// `y_delta` must already be in look-up-positive convention; screen space Y grows
    /// downward so callers flip it. With `constrain_pitch` off the basis degrades near
    /// +/-90 degrees. Non-finite deltas are ignored.
    pub fn process_look(&mut self, x_delta: f32, y_delta: f32, constrain_pitch: bool) {
        if !(x_delta * self.look_sensitivity).is_finite()
            || !(y_delta * self.look_sensitivity).is_finite()
        {
            return;
        }

        self.yaw += x_delta * self.look_sensitivity;
        self.pitch += y_delta * self.look_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_basis();
    }

    pub fn process_look_constrained(&mut self, x_delta: f32, y_delta: f32) {
        self.process_look(x_delta, y_delta, true);
    }

    /// Scroll up narrows the field of view
    pub fn process_zoom(&mut self, scroll_delta: f32) {
        if scroll_delta.is_nan() {
            return;
        }
        self.zoom = (self.zoom - scroll_delta).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn to_uniform(&self, aspect_ratio: f32) -> CameraUniform {
        CameraUniform {
            view: self.view_matrix().to_cols_array_2d(),
            projection: self.projection_matrix(aspect_ratio).to_cols_array_2d(),
            position: self.position.to_array(),
            fov_degrees: self.zoom,
        }
    }

    fn update_basis(&mut self) {
        self.front = front_from_angles(self.yaw, self.pitch);
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

/// Unit view direction for yaw/pitch in degrees
pub fn front_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    let (yaw_sin, yaw_cos) = yaw.to_radians().sin_cos();
    let (pitch_sin, pitch_cos) = pitch.to_radians().sin_cos();

    Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize()
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }
}
