//! Per-frame rendering.

mod frame;

pub use frame::{FrameRenderer, CLEAR_COLOR, TRIANGLE_VERTEX_COUNT};
