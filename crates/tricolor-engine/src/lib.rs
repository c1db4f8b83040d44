//! Tricolor engine crate.
//!
//! Owns the platform + GL runtime pieces for drawing one colored triangle on
//! native desktops (glutin) and in the browser (WebGL2).

pub mod core;
pub mod device;
pub mod geometry;
pub mod logging;
pub mod render;
pub mod shader;
pub mod window;
