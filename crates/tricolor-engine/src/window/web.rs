use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::web::EventLoopExtWebSys;
use winit::window::WindowId;

use crate::core::{Lifecycle, LifecycleState};
use crate::device::WebDevice;

use super::RuntimeConfig;

/// Hands the loop to the browser and returns immediately.
///
/// Frames are drawn from animation-frame callbacks. The page may be torn
/// down at any time, so cleanup is never run on this target.
pub(super) fn spawn(event_loop: EventLoop<()>, config: RuntimeConfig) {
    event_loop.spawn_app(WebApp::new(config));
}

struct WebApp {
    config: RuntimeConfig,
    device: Option<WebDevice>,
    lifecycle: Lifecycle<glow::Context>,
}

impl WebApp {
    fn new(config: RuntimeConfig) -> Self {
        Self {
            config,
            device: None,
            lifecycle: Lifecycle::new(),
        }
    }
}

impl ApplicationHandler for WebApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.device.is_some() || self.lifecycle.state() != LifecycleState::Uninitialized {
            return;
        }

        let device = match WebDevice::new(event_loop, self.config.window_attributes()) {
            Ok(d) => d,
            Err(e) => {
                log::error!("{e:#}");
                event_loop.exit();
                return;
            }
        };

        if let Err(e) = self.lifecycle.start(device.gl()) {
            log::error!("renderer setup failed: {e:#}");
            event_loop.exit();
            return;
        }

        device.window().request_redraw();
        self.device = Some(device);
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(device) = &self.device else { return };

        match event {
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.lifecycle.frame(device.gl(), device) {
                    log::error!("frame failed: {e:#}");
                }
                // Keeps one frame queued per animation frame.
                device.window().request_redraw();
            }

            WindowEvent::Resized(size) => {
                log::debug!("ignoring resize to {}x{}", size.width, size.height);
            }

            _ => {}
        }
    }
}
