use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use crate::core::{Lifecycle, LifecycleState};
use crate::device::{DeviceInit, NativeDevice};

use super::RuntimeConfig;

/// Runs the polling loop until the window is closed.
///
/// Returns the first fatal setup error, if any, after the loop has exited.
pub(super) fn run(event_loop: EventLoop<()>, config: RuntimeConfig, init: DeviceInit) -> Result<()> {
    let mut app = NativeApp::new(config, init);

    event_loop
        .run_app(&mut app)
        .context("winit event loop terminated with error")?;

    match app.fatal.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct NativeApp {
    config: RuntimeConfig,
    init: DeviceInit,
    device: Option<NativeDevice>,
    lifecycle: Lifecycle<glow::Context>,
    fatal: Option<anyhow::Error>,
}

impl NativeApp {
    fn new(config: RuntimeConfig, init: DeviceInit) -> Self {
        Self {
            config,
            init,
            device: None,
            lifecycle: Lifecycle::new(),
            fatal: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        self.fatal = Some(err);
        event_loop.exit();
    }

    /// Releases GL objects while the context is current, then drops the
    /// surface, context and window.
    fn shutdown(&mut self) {
        let Some(device) = self.device.take() else {
            return;
        };
        self.lifecycle.terminate(device.gl());
        drop(device);
        log::debug!("window and GL context destroyed");
    }
}

impl ApplicationHandler for NativeApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.device.is_some() || self.lifecycle.state() != LifecycleState::Uninitialized {
            return;
        }

        let device =
            match NativeDevice::new(event_loop, self.config.window_attributes(), &self.init) {
                Ok(d) => d,
                Err(e) => return self.fail(event_loop, e),
            };

        if let Err(e) = self.lifecycle.start(device.gl()) {
            drop(device);
            return self.fail(event_loop, e.context("renderer setup failed"));
        }

        device.window().request_redraw();
        self.device = Some(device);

        // Never block in the event pump; a frame is drawn every iteration.
        event_loop.set_control_flow(ControlFlow::Poll);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(device) = &self.device {
            device.window().request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => {
                let Some(device) = &self.device else { return };
                if let Err(e) = self.lifecycle.frame(device.gl(), device) {
                    log::error!("frame failed: {e:#}");
                }
            }

            WindowEvent::Resized(size) => {
                log::debug!("ignoring resize to {}x{}", size.width, size.height);
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}
