pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod traits;
pub mod types;
pub mod update;

pub use camera::{Camera, CameraMovement};
pub use config::CameraConfig;
pub use update::{apply_frame_input, FrameInput};
