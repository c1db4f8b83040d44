use std::mem::{offset_of, size_of};

use bytemuck::{Pod, Zeroable};

use crate::shader::{COLOR_ATTRIBUTE, POSITION_ATTRIBUTE};

/// Interleaved vertex: clip-space position followed by linear RGB color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// The triangle: bottom-left red, bottom-right green, top blue.
pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex {
        position: [-0.5, -0.5, 0.0],
        color: [1.0, 0.0, 0.0],
    },
    Vertex {
        position: [0.5, -0.5, 0.0],
        color: [0.0, 1.0, 0.0],
    },
    Vertex {
        position: [0.0, 0.5, 0.0],
        color: [0.0, 0.0, 1.0],
    },
];

/// One float attribute inside the interleaved vertex.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader input the slot is resolved from.
    pub name: &'static str,
    pub components: i32,
    /// Byte offset inside [`Vertex`].
    pub offset: i32,
}

/// Byte distance between consecutive vertices.
pub const VERTEX_STRIDE: i32 = size_of::<Vertex>() as i32;

pub const VERTEX_ATTRIBUTES: [VertexAttribute; 2] = [
    VertexAttribute {
        name: POSITION_ATTRIBUTE,
        components: 3,
        offset: offset_of!(Vertex, position) as i32,
    },
    VertexAttribute {
        name: COLOR_ATTRIBUTE,
        components: 3,
        offset: offset_of!(Vertex, color) as i32,
    },
];
