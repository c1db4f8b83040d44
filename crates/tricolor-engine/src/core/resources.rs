use anyhow::Result;

use crate::device::GlApi;
use crate::geometry::GeometryBuffers;
use crate::shader::{BuildReport, ShaderBuilder};

/// The program, vertex array and vertex buffer, owned together.
///
/// Handles are valid from [`RenderResources::init`] until
/// [`RenderResources::release`]; release is idempotent.
#[derive(Debug)]
pub struct RenderResources<G: GlApi> {
    program: Option<G::Program>,
    vertex_array: Option<G::VertexArray>,
    buffer: Option<G::Buffer>,
    report: BuildReport,
}

impl<G: GlApi> RenderResources<G> {
    /// Builds the embedded shader program, then uploads the triangle.
    pub fn init(gl: &G) -> Result<Self> {
        Self::init_with(gl, &ShaderBuilder::default())
    }

    pub fn init_with(gl: &G, shaders: &ShaderBuilder<'_>) -> Result<Self> {
        let program = shaders.build(gl)?;

        let geometry = match GeometryBuffers::upload(gl, program.handle) {
            Ok(g) => g,
            Err(e) => {
                gl.delete_program(program.handle);
                return Err(e);
            }
        };

        Ok(Self {
            program: Some(program.handle),
            vertex_array: Some(geometry.vertex_array),
            buffer: Some(geometry.buffer),
            report: program.report,
        })
    }

    /// Shader build outcome.
    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    /// Program and vertex array, or `None` once released.
    pub fn draw_handles(&self) -> Option<(G::Program, G::VertexArray)> {
        Some((self.program?, self.vertex_array?))
    }

    pub fn is_released(&self) -> bool {
        self.program.is_none() && self.vertex_array.is_none() && self.buffer.is_none()
    }

    /// Deletes whatever handles are still held. Further calls do nothing.
    pub fn release(&mut self, gl: &G) {
        if let Some(vao) = self.vertex_array.take() {
            gl.delete_vertex_array(vao);
        }
        if let Some(buffer) = self.buffer.take() {
            gl.delete_buffer(buffer);
        }
        if let Some(program) = self.program.take() {
            gl.delete_program(program);
        }
    }
}
