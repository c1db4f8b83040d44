use anyhow::{Context, Result};

use crate::core::RenderResources;
use crate::device::{GlApi, Present};

/// Background color: dark teal, opaque.
pub const CLEAR_COLOR: [f32; 4] = [0.2, 0.3, 0.3, 1.0];

/// Vertices per draw call.
pub const TRIANGLE_VERTEX_COUNT: i32 = 3;

/// Draws the triangle and presents it.
///
/// Holds no per-frame state: given unchanged GPU state every call produces
/// the same image.
#[derive(Debug, Clone, Copy)]
pub struct FrameRenderer {
    clear_color: [f32; 4],
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self {
            clear_color: CLEAR_COLOR,
        }
    }
}

impl FrameRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    /// Clears, issues one `TRIANGLES` draw of three vertices, then presents.
    ///
    /// Fails only when `resources` were already released or presenting fails.
    pub fn render<G, P>(&self, gl: &G, resources: &RenderResources<G>, presenter: &P) -> Result<()>
    where
        G: GlApi,
        P: Present + ?Sized,
    {
        let (program, vertex_array) = resources
            .draw_handles()
            .context("render resources already released")?;

        let [r, g, b, a] = self.clear_color;
        gl.clear_color(r, g, b, a);
        gl.clear(glow::COLOR_BUFFER_BIT);

        gl.use_program(Some(program));
        gl.bind_vertex_array(Some(vertex_array));
        gl.draw_arrays(glow::TRIANGLES, 0, TRIANGLE_VERTEX_COUNT);

        presenter.present()
    }
}
