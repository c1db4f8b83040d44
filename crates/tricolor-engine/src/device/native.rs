use std::num::NonZeroU32;

use anyhow::{Context, Result};
use glutin::config::{Api, Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentContext, NotCurrentGlContext,
    PossiblyCurrentContext, Version,
};
use glutin::display::{Display, DisplayApiPreference, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::GlWindow;
use raw_window_handle::{HasDisplayHandle, HasWindowHandle, RawWindowHandle};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use super::init::log_driver_info;
use super::{DeviceInit, Present};

/// Native window plus its current GL context.
///
/// Owns, in drop order: the `glow` function table, the window surface, the
/// context, and finally the window itself. Dropping the device tears the
/// whole stack down; GL objects must be released before that.
pub struct NativeDevice {
    gl: glow::Context,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
}

impl NativeDevice {
    /// Creates the window, a GL context, and makes it current on this thread.
    pub fn new(
        event_loop: &ActiveEventLoop,
        attributes: WindowAttributes,
        init: &DeviceInit,
    ) -> Result<Self> {
        let window = event_loop
            .create_window(attributes)
            .context("failed to create window")?;
        let raw_handle = window
            .window_handle()
            .context("window has no native handle")?
            .as_raw();
        let raw_display = event_loop
            .display_handle()
            .context("event loop has no native display handle")?
            .as_raw();

        // SAFETY: both handles come from the live event loop and window above.
        let display = unsafe { Display::new(raw_display, display_preference(raw_handle)) }
            .context("failed to open GL display")?;

        let template = ConfigTemplateBuilder::new()
            .compatible_with_native_window(raw_handle)
            .build();
        let configs = unsafe { display.find_configs(template) }
            .context("failed to query GL configs")?;
        let gl_config = select_config(configs)?;

        let not_current = create_context(&display, &gl_config, raw_handle, init)?;

        let surface_attributes = window
            .build_surface_attributes(Default::default())
            .context("failed to describe GL window surface")?;
        let surface = unsafe { display.create_window_surface(&gl_config, &surface_attributes) }
            .context("failed to create GL window surface")?;

        let context = not_current
            .make_current(&surface)
            .context("failed to make GL context current")?;

        if init.vsync {
            if let Err(e) =
                surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN))
            {
                log::warn!("failed to enable vsync: {e}");
            }
        }

        // SAFETY: the context created from `display` is current on this thread.
        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|symbol| {
                display.get_proc_address(symbol).cast()
            })
        };
        log_driver_info(&gl);

        Ok(Self {
            gl,
            surface,
            context,
            window,
        })
    }

    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl Present for NativeDevice {
    fn present(&self) -> Result<()> {
        self.window.pre_present_notify();
        self.surface
            .swap_buffers(&self.context)
            .context("failed to swap buffers")
    }
}

/// Native GL platform API for the current OS.
fn display_preference(window: RawWindowHandle) -> DisplayApiPreference {
    #[cfg(target_os = "windows")]
    {
        DisplayApiPreference::Wgl(Some(window))
    }

    #[cfg(target_os = "macos")]
    {
        let _ = window;
        DisplayApiPreference::Cgl
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        let _ = window;
        DisplayApiPreference::Egl
    }
}

/// Prefers configs that support GLES 3, then single-sampled ones.
///
/// Drivers may report no matching config at all, which is a fatal setup error.
fn select_config(configs: impl Iterator<Item = Config>) -> Result<Config> {
    configs
        .max_by_key(|c| (c.api().contains(Api::GLES3), c.num_samples() == 0))
        .context("no usable GL config for this window")
}

fn create_context(
    display: &Display,
    config: &Config,
    handle: RawWindowHandle,
    init: &DeviceInit,
) -> Result<NotCurrentContext> {
    let gles = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::Gles(Some(Version::new(3, 0))))
        .build(Some(handle));

    match unsafe { display.create_context(config, &gles) } {
        Ok(context) => Ok(context),
        Err(e) if init.allow_desktop_fallback => {
            log::warn!("OpenGL ES 3.0 unavailable ({e}); falling back to desktop OpenGL 4.3");
            let desktop = ContextAttributesBuilder::new()
                .with_context_api(ContextApi::OpenGl(Some(Version::new(4, 3))))
                .build(Some(handle));
            unsafe { display.create_context(config, &desktop) }
                .context("failed to create OpenGL context")
        }
        Err(e) => Err(e).context("failed to create OpenGL ES 3.0 context"),
    }
}
