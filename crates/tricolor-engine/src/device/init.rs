/// Initialization parameters for the GL device.
///
/// Keep this structure minimal. Add flags only when a concrete platform
/// requirement exists.
#[derive(Debug, Clone)]
pub struct DeviceInit {
    /// Request vsync (swap interval 1) on native surfaces.
    ///
    /// Failure to apply it is logged and ignored.
    pub vsync: bool,

    /// Retry with desktop OpenGL 4.3 when the platform has no OpenGL ES 3.0
    /// driver. GL 4.3 accepts `#version 300 es` shaders.
    pub allow_desktop_fallback: bool,
}

impl Default for DeviceInit {
    fn default() -> Self {
        Self {
            vsync: true,
            allow_desktop_fallback: true,
        }
    }
}

/// Logs the driver identification strings once a context is live.
pub(crate) fn log_driver_info<G: super::GlApi>(gl: &G) {
    log::info!("GL version: {}", gl.parameter_string(glow::VERSION));
    log::info!(
        "GLSL version: {}",
        gl.parameter_string(glow::SHADING_LANGUAGE_VERSION)
    );
    log::debug!("GL renderer: {}", gl.parameter_string(glow::RENDERER));
}
