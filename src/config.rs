use anyhow::{ensure, Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::camera::{
    front_from_angles, Camera, DEFAULT_LOOK_SENSITIVITY, DEFAULT_MOVEMENT_SPEED, DEFAULT_PITCH,
    DEFAULT_YAW, DEFAULT_ZOOM,
};

const MIN_WORLD_UP_LENGTH_SQUARED: f32 = 1e-12;
const MIN_UP_FRONT_SINE: f32 = 1e-4;

/// Camera settings loaded from JSON. Missing fields take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub world_up: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    pub movement_speed: f32,
    pub look_sensitivity: f32,
    pub zoom: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            world_up: [0.0, 1.0, 0.0],
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            movement_speed: DEFAULT_MOVEMENT_SPEED,
            look_sensitivity: DEFAULT_LOOK_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl CameraConfig {
    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read camera config: {:?}", path))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("Invalid camera config: {:?}", path))?;
        log::info!("Loaded camera config from {:?}", path);
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the camera basis cannot be derived from
    pub fn validate(&self) -> Result<()> {
        let position = Vec3::from_array(self.position);
        let world_up = Vec3::from_array(self.world_up);
        ensure!(position.is_finite(), "position must be finite: {:?}", self.position);
        ensure!(
            self.yaw.is_finite() && self.pitch.is_finite(),
            "yaw and pitch must be finite: yaw {}, pitch {}",
            self.yaw,
            self.pitch
        );
        ensure!(
            self.movement_speed.is_finite() && self.look_sensitivity.is_finite(),
            "movement_speed and look_sensitivity must be finite"
        );
        ensure!(!self.zoom.is_nan(), "zoom must be a number");
        ensure!(
            world_up.is_finite() && world_up.length_squared() > MIN_WORLD_UP_LENGTH_SQUARED,
            "world_up must be a non-zero vector: {:?}",
            self.world_up
        );

        let front = front_from_angles(self.yaw, self.pitch);
        ensure!(
            front.cross(world_up.normalize()).length() > MIN_UP_FRONT_SINE,
            "world_up {:?} is parallel to the initial view direction {:?}",
            self.world_up,
            front.to_array()
        );
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_camera(&self) -> Camera {
        Camera::new(
            Vec3::from_array(self.position),
            Vec3::from_array(self.world_up),
            self.yaw,
            self.pitch,
        )
        .with_movement_speed(self.movement_speed)
        .with_look_sensitivity(self.look_sensitivity)
        .with_zoom(self.zoom)
    }
}
