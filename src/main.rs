use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{CursorGrabMode, Window, WindowId},
};

use freelook::cli::Cli;
use freelook::core::{Button, Clock, Controller, WinitController};
use freelook::logging::init_logger;
use freelook::traits::ViewSource;
use freelook::{apply_frame_input, Camera, CameraConfig, FrameInput};

const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);
const STATUS_LOG_INTERVAL: f32 = 1.0;

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    camera: Camera,
    controller: WinitController,
    clock: Clock,
    since_status: f32,
}

impl App {
    fn new(cli: Cli, camera: Camera) -> Self {
        Self {
            cli,
            window: None,
            camera,
            controller: WinitController::new(),
            clock: Clock::new().with_max_delta(MAX_FRAME_DELTA),
            since_status: 0.0,
        }
    }

    fn grab_cursor(window: &Window) {
        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
        match grabbed {
            Ok(()) => window.set_cursor_visible(false),
            Err(e) => log::warn!("Cursor grab unavailable, look uses free cursor: {}", e),
        }
    }

    fn status_line(&self) -> String {
        let eye = self.camera.eye();
        format!(
            "freelook | pos ({:.2}, {:.2}, {:.2}) | yaw {:.1} pitch {:.1} | fov {:.1}",
            eye.x,
            eye.y,
            eye.z,
            self.camera.display_yaw(),
            self.camera.pitch(),
            self.camera.fov_degrees(),
        )
    }

    fn quit(&self, event_loop: &ActiveEventLoop) {
        log::info!("Exiting at {}", self.status_line());
        event_loop.exit();
    }

    fn frame(&mut self) {
        let delta = self.clock.tick();
        let input = FrameInput::from_controller(&self.controller, delta);
        self.controller.reset_deltas();
        self.since_status += delta;

        if input.is_idle() {
            return;
        }
        apply_frame_input(&mut self.camera, &input);

        let Some(window) = &self.window else {
            return;
        };

        let size = window.inner_size();
        let aspect = size.width as f32 / size.height.max(1) as f32;
        let uniform = self.camera.to_uniform(aspect);
        log::trace!("camera uniform: {:?}", uniform);

        if !self.cli.no_ui {
            window.set_title(&self.status_line());
        }

        if self.since_status >= STATUS_LOG_INTERVAL {
            self.since_status = 0.0;
            log::debug!("{}", self.status_line());
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("freelook")
                .with_inner_size(LogicalSize::new(self.cli.width, self.cli.height)),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        Self::grab_cursor(&window);
        self.clock.reset();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => self.quit(event_loop),
            WindowEvent::RedrawRequested => self.frame(),
            other => self.controller.process_event(&other),
        }

        if self.controller.is_down(Button::Escape) && !event_loop.exiting() {
            self.quit(event_loop);
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        self.controller.process_device_event(&event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    init_logger();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => CameraConfig::load(path)?,
        None => CameraConfig::default(),
    };
    let config = cli.apply_overrides(config);
    config
        .validate()
        .context("Invalid camera settings after command-line overrides")?;

    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let camera = config.to_camera();
    log::info!(
        "Camera at {:?}, front {:?}, fov {}",
        camera.position(),
        camera.front(),
        camera.zoom()
    );

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(cli, camera);

    log::info!("Controls: WASD move, mouse look, wheel zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
