use glow::HasContext;

use super::api::{GlApi, ShaderStage};

type Shader = <glow::Context as HasContext>::Shader;
type Program = <glow::Context as HasContext>::Program;
type Buffer = <glow::Context as HasContext>::Buffer;
type VertexArray = <glow::Context as HasContext>::VertexArray;

// SAFETY (all blocks below): a `glow::Context` is only handed out by the
// device constructors after its GL context was made current on this thread,
// and handles passed in were created by the same context.
impl GlApi for glow::Context {
    type Shader = Shader;
    type Program = Program;
    type Buffer = Buffer;
    type VertexArray = VertexArray;

    fn create_shader(&self, stage: ShaderStage) -> Result<Shader, String> {
        unsafe { HasContext::create_shader(self, stage.gl_enum()) }
    }

    fn shader_source(&self, shader: Shader, source: &str) {
        unsafe { HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: Shader) {
        unsafe { HasContext::compile_shader(self, shader) }
    }

    fn shader_compile_status(&self, shader: Shader) -> bool {
        unsafe { self.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Shader) -> String {
        unsafe { self.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Shader) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<Program, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: Program, shader: Shader) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn detach_shader(&self, program: Program, shader: Shader) {
        unsafe { HasContext::detach_shader(self, program, shader) }
    }

    fn link_program(&self, program: Program) {
        unsafe { HasContext::link_program(self, program) }
    }

    fn program_link_status(&self, program: Program) -> bool {
        unsafe { self.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: Program) -> String {
        unsafe { self.get_program_info_log(program) }
    }

    fn attrib_location(&self, program: Program, name: &str) -> Option<u32> {
        unsafe { self.get_attrib_location(program, name) }
    }

    fn use_program(&self, program: Option<Program>) {
        unsafe { HasContext::use_program(self, program) }
    }

    fn delete_program(&self, program: Program) {
        unsafe { HasContext::delete_program(self, program) }
    }

    fn create_buffer(&self) -> Result<Buffer, String> {
        unsafe { HasContext::create_buffer(self) }
    }

    fn bind_buffer(&self, target: u32, buffer: Option<Buffer>) {
        unsafe { HasContext::bind_buffer(self, target, buffer) }
    }

    fn buffer_data_u8_slice(&self, target: u32, data: &[u8], usage: u32) {
        unsafe { HasContext::buffer_data_u8_slice(self, target, data, usage) }
    }

    fn delete_buffer(&self, buffer: Buffer) {
        unsafe { HasContext::delete_buffer(self, buffer) }
    }

    fn create_vertex_array(&self) -> Result<VertexArray, String> {
        unsafe { HasContext::create_vertex_array(self) }
    }

    fn bind_vertex_array(&self, vertex_array: Option<VertexArray>) {
        unsafe { HasContext::bind_vertex_array(self, vertex_array) }
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        unsafe {
            HasContext::vertex_attrib_pointer_f32(
                self, index, size, data_type, normalized, stride, offset,
            )
        }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { HasContext::enable_vertex_attrib_array(self, index) }
    }

    fn delete_vertex_array(&self, vertex_array: VertexArray) {
        unsafe { HasContext::delete_vertex_array(self, vertex_array) }
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe { HasContext::clear_color(self, r, g, b, a) }
    }

    fn clear(&self, mask: u32) {
        unsafe { HasContext::clear(self, mask) }
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        unsafe { HasContext::draw_arrays(self, mode, first, count) }
    }

    fn parameter_string(&self, parameter: u32) -> String {
        unsafe { self.get_parameter_string(parameter) }
    }
}
