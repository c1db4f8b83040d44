//! Triangle geometry and its GPU buffers.

mod buffer;
mod vertex;

pub use buffer::GeometryBuffers;
pub use vertex::{
    Vertex, VertexAttribute, TRIANGLE_VERTICES, VERTEX_ATTRIBUTES, VERTEX_STRIDE,
};
