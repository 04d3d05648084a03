use glam::{Mat4, Vec3};

use crate::camera::Camera;

/// What a renderer reads from a camera each frame
pub trait ViewSource {
    /// Get the view matrix for rendering
    fn view_matrix(&self) -> Mat4;

    /// Get the projection matrix for the given width / height ratio
    fn projection_matrix(&self, aspect_ratio: f32) -> Mat4;

    /// Get the camera position in world space
    fn eye(&self) -> Vec3;

    /// Get the vertical field of view in degrees
    fn fov_degrees(&self) -> f32;
}

impl ViewSource for Camera {
    fn view_matrix(&self) -> Mat4 {
        Camera::view_matrix(self)
    }

    fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Camera::projection_matrix(self, aspect_ratio)
    }

    fn eye(&self) -> Vec3 {
        self.position()
    }

    fn fov_degrees(&self) -> f32 {
        self.zoom()
    }
}
