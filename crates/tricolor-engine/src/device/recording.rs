//! In-memory `GlApi` that records every call.
//!
//! The "driver" is deliberately crude: a shader compiles when its source has
//! a `#version 300 es` header and a `main` entry point, a program links when
//! every attached shader compiled, and attribute locations are handed out in
//! declaration order of the vertex stage's `in` variables.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use super::api::{GlApi, Present, ShaderStage};

#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    CreateShader(ShaderStage, u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    DetachShader(u32, u32),
    LinkProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    CreateBuffer(u32),
    BindBuffer(u32, Option<u32>),
    BufferData { target: u32, len: usize, usage: u32 },
    DeleteBuffer(u32),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    VertexAttribPointer {
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    EnableVertexAttribArray(u32),
    DeleteVertexArray(u32),
    ClearColor([f32; 4]),
    Clear(u32),
    DrawArrays { mode: u32, first: i32, count: i32 },
}

#[derive(Debug, Default)]
struct ShaderObject {
    stage: Option<ShaderStage>,
    source: String,
    compiled: bool,
    info_log: String,
}

#[derive(Debug, Default)]
struct ProgramObject {
    attached: Vec<u32>,
    linked: bool,
    info_log: String,
    attributes: HashMap<String, u32>,
}

#[derive(Debug, Default)]
pub struct RecordingGl {
    next_id: Cell<u32>,
    calls: RefCell<Vec<GlCall>>,
    shaders: RefCell<HashMap<u32, ShaderObject>>,
    programs: RefCell<HashMap<u32, ProgramObject>>,
    live: RefCell<HashSet<u32>>,
    uploads: RefCell<HashMap<u32, Vec<u8>>>,
    bound_buffer: Cell<Option<u32>>,
    allocation_budget: Cell<Option<u32>>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `create_*` call fail, as on a lost context.
    pub fn fail_allocations(&self) {
        self.fail_allocations_after(0);
    }

    /// Lets `n` more `create_*` calls succeed, then fails the rest.
    pub fn fail_allocations_after(&self, n: u32) {
        self.allocation_budget.set(Some(n));
    }

    pub fn calls(&self) -> Vec<GlCall> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn count(&self, pred: impl Fn(&GlCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    /// Number of objects created and not yet deleted.
    pub fn live_objects(&self) -> usize {
        self.live.borrow().len()
    }

    pub fn uploaded(&self, buffer: u32) -> Option<Vec<u8>> {
        self.uploads.borrow().get(&buffer).cloned()
    }

    fn record(&self, call: GlCall) {
        self.calls.borrow_mut().push(call);
    }

    fn allocate(&self) -> Result<u32, String> {
        match self.allocation_budget.get() {
            Some(0) => return Err("context lost".to_string()),
            Some(n) => self.allocation_budget.set(Some(n - 1)),
            None => {}
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.live.borrow_mut().insert(id);
        Ok(id)
    }

    fn release(&self, id: u32) {
        assert!(self.live.borrow_mut().remove(&id), "object {id} deleted twice");
    }
}

fn compile(source: &str) -> Result<(), String> {
    if !source.starts_with("#version 300 es") {
        return Err("ERROR: 0:1: '' : unsupported or missing #version directive".to_string());
    }
    if !source.contains("void main()") {
        return Err("ERROR: 0:1: 'main' : no entry point defined".to_string());
    }
    Ok(())
}

fn declared_inputs(source: &str) -> Vec<String> {
    source
        .lines()
        .filter_map(|line| line.trim().strip_prefix("in "))
        .filter_map(|decl| decl.trim_end_matches(';').split_whitespace().last())
        .map(str::to_string)
        .collect()
}

impl GlApi for RecordingGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let id = self.allocate()?;
        self.shaders.borrow_mut().insert(
            id,
            ShaderObject {
                stage: Some(stage),
                ..ShaderObject::default()
            },
        );
        self.record(GlCall::CreateShader(stage, id));
        Ok(id)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        if let Some(s) = self.shaders.borrow_mut().get_mut(&shader) {
            s.source = source.to_string();
        }
    }

    fn compile_shader(&self, shader: u32) {
        if let Some(s) = self.shaders.borrow_mut().get_mut(&shader) {
            match compile(&s.source) {
                Ok(()) => s.compiled = true,
                Err(log) => s.info_log = log,
            }
        }
        self.record(GlCall::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.shaders.borrow().get(&shader).is_some_and(|s| s.compiled)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        self.shaders
            .borrow()
            .get(&shader)
            .map(|s| s.info_log.clone())
            .unwrap_or_default()
    }

    fn delete_shader(&self, shader: u32) {
        self.release(shader);
        self.record(GlCall::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let id = self.allocate()?;
        self.programs.borrow_mut().insert(id, ProgramObject::default());
        self.record(GlCall::CreateProgram(id));
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        if let Some(p) = self.programs.borrow_mut().get_mut(&program) {
            p.attached.push(shader);
        }
        self.record(GlCall::AttachShader(program, shader));
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        if let Some(p) = self.programs.borrow_mut().get_mut(&program) {
            p.attached.retain(|s| *s != shader);
        }
        self.record(GlCall::DetachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        let shaders = self.shaders.borrow();
        if let Some(p) = self.programs.borrow_mut().get_mut(&program) {
            let attached: Vec<&ShaderObject> =
                p.attached.iter().filter_map(|id| shaders.get(id)).collect();
            let has_stage = |stage: ShaderStage| attached.iter().any(|s| s.stage == Some(stage));

            if !has_stage(ShaderStage::Vertex) || !has_stage(ShaderStage::Fragment) {
                p.info_log = "error: missing shader stage".to_string();
            } else if attached.iter().any(|s| !s.compiled) {
                p.info_log = "error: linking with uncompiled/unspecialized shader".to_string();
            } else {
                p.linked = true;
                p.attributes = attached
                    .iter()
                    .filter(|s| s.stage == Some(ShaderStage::Vertex))
                    .flat_map(|s| declared_inputs(&s.source))
                    .zip(0u32..)
                    .collect();
            }
        }
        self.record(GlCall::LinkProgram(program));
    }

    fn program_link_status(&self, program: u32) -> bool {
        self.programs.borrow().get(&program).is_some_and(|p| p.linked)
    }

    fn program_info_log(&self, program: u32) -> String {
        self.programs
            .borrow()
            .get(&program)
            .map(|p| p.info_log.clone())
            .unwrap_or_default()
    }

    fn attrib_location(&self, program: u32, name: &str) -> Option<u32> {
        self.programs
            .borrow()
            .get(&program)
            .and_then(|p| p.attributes.get(name).copied())
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(GlCall::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.release(program);
        self.record(GlCall::DeleteProgram(program));
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let id = self.allocate()?;
        self.record(GlCall::CreateBuffer(id));
        Ok(id)
    }

    fn bind_buffer(&self, target: u32, buffer: Option<u32>) {
        self.bound_buffer.set(buffer);
        self.record(GlCall::BindBuffer(target, buffer));
    }

    fn buffer_data_u8_slice(&self, target: u32, data: &[u8], usage: u32) {
        if let Some(buffer) = self.bound_buffer.get() {
            self.uploads.borrow_mut().insert(buffer, data.to_vec());
        }
        self.record(GlCall::BufferData {
            target,
            len: data.len(),
            usage,
        });
    }

    fn delete_buffer(&self, buffer: u32) {
        self.release(buffer);
        self.record(GlCall::DeleteBuffer(buffer));
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let id = self.allocate()?;
        self.record(GlCall::CreateVertexArray(id));
        Ok(id)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(GlCall::BindVertexArray(vertex_array));
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
        self.record(GlCall::VertexAttribPointer {
            index,
            size,
            data_type,
            normalized,
            stride,
            offset,
        });
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(GlCall::EnableVertexAttribArray(index));
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.release(vertex_array);
        self.record(GlCall::DeleteVertexArray(vertex_array));
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.record(GlCall::ClearColor([r, g, b, a]));
    }

    fn clear(&self, mask: u32) {
        self.record(GlCall::Clear(mask));
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.record(GlCall::DrawArrays { mode, first, count });
    }

    fn parameter_string(&self, parameter: u32) -> String {
        match parameter {
            glow::VERSION => "OpenGL ES 3.0 (recording)".to_string(),
            glow::SHADING_LANGUAGE_VERSION => "OpenGL ES GLSL ES 3.00".to_string(),
            _ => String::new(),
        }
    }
}

/// Counts presents; optionally fails every swap.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    presents: Cell<u32>,
    fail: bool,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            presents: Cell::new(0),
            fail: true,
        }
    }

    pub fn presents(&self) -> u32 {
        self.presents.get()
    }
}

impl Present for RecordingPresenter {
    fn present(&self) -> anyhow::Result<()> {
        self.presents.set(self.presents.get() + 1);
        anyhow::ensure!(!self.fail, "swap_buffers: surface lost");
        Ok(())
    }
}
