//! Embedded GLSL ES 3.00 sources.
//!
//! Attribute names are looked up on the linked program at runtime, so the
//! identifiers here and in [`crate::geometry`] must stay in sync.

/// Vertex input carrying the clip-space position.
pub const POSITION_ATTRIBUTE: &str = "aPos";

/// Vertex input carrying the per-vertex color.
pub const COLOR_ATTRIBUTE: &str = "aColor";

pub const VERTEX_SHADER_SOURCE: &str = "\
#version 300 es
in vec3 aPos;
in vec3 aColor;
out vec3 vColor;
void main() {
    gl_Position = vec4(aPos, 1.0);
    vColor = aColor;
}
";

pub const FRAGMENT_SHADER_SOURCE: &str = "\
#version 300 es
precision mediump float;
in vec3 vColor;
out vec4 FragColor;
void main() {
    FragColor = vec4(vColor, 1.0);
}
";
