//! GL device management.
//!
//! This module is responsible for:
//! - creating the window together with an OpenGL ES 3.0 / WebGL2 context
//! - exposing the GL entry points the renderer uses through [`GlApi`]
//! - presenting finished frames through [`Present`]

mod api;
mod glow_api;
mod init;

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(test)]
pub(crate) mod recording;

pub use api::{GlApi, Present, ShaderStage};
pub use init::DeviceInit;

#[cfg(not(target_arch = "wasm32"))]
pub use native::NativeDevice;
#[cfg(target_arch = "wasm32")]
pub use web::{WebDevice, CANVAS_ID};
