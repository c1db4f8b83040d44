use anyhow::{anyhow, Context, Result};

use crate::device::GlApi;

use super::vertex::{Vertex, TRIANGLE_VERTICES, VERTEX_ATTRIBUTES, VERTEX_STRIDE};

/// GPU-side triangle geometry: one vertex buffer and the vertex array that
/// maps it onto the program's inputs.
#[derive(Debug)]
pub struct GeometryBuffers<G: GlApi> {
    pub vertex_array: G::VertexArray,
    pub buffer: G::Buffer,
}

impl<G: GlApi> GeometryBuffers<G> {
    /// Uploads [`TRIANGLE_VERTICES`] and describes their layout.
    pub fn upload(gl: &G, program: G::Program) -> Result<Self> {
        Self::upload_vertices(gl, program, &TRIANGLE_VERTICES)
    }

    /// Uploads `vertices` once with a static usage hint.
    ///
    /// Attribute slots are queried from `program` by name, so it must already
    /// be linked. An unresolved name is logged and that attribute is left
    /// disabled. Both objects are unbound on return.
    pub fn upload_vertices(gl: &G, program: G::Program, vertices: &[Vertex]) -> Result<Self> {
        let buffer = gl
            .create_buffer()
            .map_err(|e| anyhow!(e))
            .context("failed to create vertex buffer")?;

        let vertex_array = match gl.create_vertex_array() {
            Ok(vao) => vao,
            Err(e) => {
                gl.delete_buffer(buffer);
                return Err(anyhow!(e)).context("failed to create vertex array");
            }
        };

        gl.bind_vertex_array(Some(vertex_array));
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
        gl.buffer_data_u8_slice(
            glow::ARRAY_BUFFER,
            bytemuck::cast_slice(vertices),
            glow::STATIC_DRAW,
        );

        for attribute in VERTEX_ATTRIBUTES {
            let Some(location) = gl.attrib_location(program, attribute.name) else {
                log::warn!(
                    "vertex attribute `{}` not found in program {program:?}; skipped",
                    attribute.name
                );
                continue;
            };

            gl.vertex_attrib_pointer_f32(
                location,
                attribute.components,
                glow::FLOAT,
                false,
                VERTEX_STRIDE,
                attribute.offset,
            );
            gl.enable_vertex_attrib_array(location);
        }

        gl.bind_buffer(glow::ARRAY_BUFFER, None);
        gl.bind_vertex_array(None);

        log::debug!(
            "uploaded {} vertices ({} bytes)",
            vertices.len(),
            size_of_val(vertices)
        );

        Ok(Self {
            vertex_array,
            buffer,
        })
    }
}
