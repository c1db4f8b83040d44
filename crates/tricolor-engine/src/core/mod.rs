//! Resource ownership and the renderer lifecycle.
//!
//! Drivers in [`crate::window`] own the platform loop; everything here is
//! platform-independent and generic over [`crate::device::GlApi`].

mod lifecycle;
mod resources;

pub use lifecycle::{Lifecycle, LifecycleState};
pub use resources::RenderResources;
