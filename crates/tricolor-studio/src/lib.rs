//! Browser entry point. Serve the wasm module next to a page containing
//! `<canvas id="canvas">`.

#![cfg(target_arch = "wasm32")]

use tricolor_engine::device::DeviceInit;
use tricolor_engine::logging::{init_logging, LoggingConfig};
use tricolor_engine::window::{Runtime, RuntimeConfig};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    init_logging(LoggingConfig::default());

    Runtime::run(RuntimeConfig::default(), DeviceInit::default())
        .map_err(|e| JsValue::from_str(&format!("{e:#}")))
}
