//! Window + runtime loop.
//!
//! Owns the `winit` event loop and selects the driver at build time:
//! a polling loop on native targets, browser-scheduled callbacks on wasm.

mod config;
#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod web;

pub use config::RuntimeConfig;

use anyhow::{Context, Result};
use winit::event_loop::EventLoop;

use crate::device::DeviceInit;

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and renders until it is closed.
    ///
    /// On native targets this blocks and returns once cleanup has run; an
    /// error means the window or GL context could not be created. On wasm it
    /// returns as soon as the browser has taken over the loop.
    pub fn run(config: RuntimeConfig, device_init: DeviceInit) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;

        #[cfg(not(target_arch = "wasm32"))]
        {
            native::run(event_loop, config, device_init)
        }

        #[cfg(target_arch = "wasm32")]
        {
            log::debug!("browser picks swap interval and context version; ignoring {device_init:?}");
            web::spawn(event_loop, config);
            Ok(())
        }
    }
}
