use anyhow::{anyhow, Context, Result};
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext};
use winit::event_loop::ActiveEventLoop;
use winit::platform::web::WindowAttributesExtWebSys;
use winit::window::{Window, WindowAttributes};

use super::init::log_driver_info;
use super::Present;

/// Id of the `<canvas>` element the page must provide.
pub const CANVAS_ID: &str = "canvas";

/// Canvas-backed window plus its WebGL2 context.
pub struct WebDevice {
    gl: glow::Context,
    window: Window,
}

impl WebDevice {
    pub fn new(event_loop: &ActiveEventLoop, attributes: WindowAttributes) -> Result<Self> {
        let canvas = find_canvas()?;

        let window = event_loop
            .create_window(attributes.with_canvas(Some(canvas.clone())))
            .context("failed to attach window to canvas")?;

        // JsValue errors are not `Send`; keep their debug rendering only.
        let context = canvas
            .get_context("webgl2")
            .map_err(|e| anyhow!("getContext(\"webgl2\") threw: {e:?}"))?
            .context("browser refused a WebGL2 context")?
            .dyn_into::<WebGl2RenderingContext>()
            .map_err(|_| anyhow!("webgl2 context has an unexpected type"))?;

        let gl = glow::Context::from_webgl2_context(context);
        log_driver_info(&gl);

        Ok(Self { gl, window })
    }

    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl Present for WebDevice {
    // The browser composites the canvas after the animation-frame callback.
    fn present(&self) -> Result<()> {
        Ok(())
    }
}

fn find_canvas() -> Result<HtmlCanvasElement> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .context("no browser document")?;

    document
        .get_element_by_id(CANVAS_ID)
        .with_context(|| format!("no element with id `{CANVAS_ID}`"))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| anyhow!("element `{CANVAS_ID}` is not a canvas"))
}
