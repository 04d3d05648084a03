// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::config::CameraConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "freelook")]
#[command(about = "Free-look camera viewer", long_about = None)]
pub struct Cli {
    /// Camera config file (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Movement speed in units per second
    #[arg(long)]
    pub speed: Option<f32>,

    /// Degrees of rotation per unit of pointer motion
    #[arg(long)]
    pub sensitivity: Option<f32>,

    /// Initial vertical field of view in degrees
    #[arg(long)]
    pub fov: Option<f32>,

    /// Window width
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Window height
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Print the effective camera config as JSON and exit
    #[arg(long = "print-config")]
    pub print_config: bool,

    /// Disable window title updates
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config
    pub fn apply_overrides(&self, mut config: CameraConfig) -> CameraConfig {
        if let Some(speed) = self.speed {
            config.movement_speed = speed;
        }
        if let Some(sensitivity) = self.sensitivity {
            config.look_sensitivity = sensitivity;
        }
        if let Some(fov) = self.fov {
            config.zoom = fov;
        }
        config
    }
}
