use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::{
    BufferId, Gl, InfoString, ProgramId, ShaderId, ShaderStage, UniformLocation, VertexArrayId,
};

/// One call observed by [`RecordingGl`].
#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    CreateShader(ShaderStage, ShaderId),
    ShaderSource(ShaderId, String),
    CompileShader(ShaderId),
    DeleteShader(ShaderId),
    CreateProgram(ProgramId),
    AttachShader(ProgramId, ShaderId),
    LinkProgram(ProgramId),
    UseProgram(ProgramId),
    UniformLocation(ProgramId, String),
    Uniform4f(UniformLocation, [f32; 4]),
    GenVertexArray(VertexArrayId),
    BindVertexArray(VertexArrayId),
    GenBuffer(BufferId),
    BindArrayBuffer(BufferId),
    BufferDataStatic(Vec<u8>),
    VertexAttribPointerF32 {
        index: u32,
        components: i32,
        stride: i32,
        offset: usize,
    },
    EnableVertexAttribArray(u32),
    ClearColorBuffer,
    DrawTriangles { first: i32, count: i32 },
}

/// In-memory [`Gl`] that records every mutating call.
///
/// Object names are handed out from a single counter starting at 1, so ids
/// are unique across object kinds. Status queries are not recorded.
#[derive(Debug)]
pub struct RecordingGl {
    calls: RefCell<Vec<GlCall>>,
    next_name: Cell<u32>,
    compile_ok: Cell<bool>,
    link_ok: Cell<bool>,
    uniforms: RefCell<HashMap<String, i32>>,
}

impl Default for RecordingGl {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            next_name: Cell::new(1),
            compile_ok: Cell::new(true),
            link_ok: Cell::new(true),
            uniforms: RefCell::new(HashMap::new()),
        }
    }
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `name` resolve to `location`; other names resolve to -1.
    pub fn with_uniform(self, name: &str, location: i32) -> Self {
        self.uniforms.borrow_mut().insert(name.to_owned(), location);
        self
    }

    /// Every subsequent compile reports failure.
    pub fn fail_compile(&self) {
        self.compile_ok.set(false);
    }

    /// Every subsequent link reports failure.
    pub fn fail_link(&self) {
        self.link_ok.set(false);
    }

    pub fn calls(&self) -> Vec<GlCall> {
        self.calls.borrow().clone()
    }

    /// Returns the calls recorded so far and starts a fresh log.
    pub fn take_calls(&self) -> Vec<GlCall> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    pub fn count(&self, pred: impl Fn(&GlCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|&c| pred(c)).count()
    }

    /// Contents of the last static buffer upload, read back as `f32`s.
    pub fn uploaded_floats(&self) -> Option<Vec<f32>> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            GlCall::BufferDataStatic(bytes) => Some(
                bytes
                    .chunks_exact(4)
                    .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
                    .collect(),
            ),
            _ => None,
        })
    }

    fn record(&self, call: GlCall) {
        self.calls.borrow_mut().push(call);
    }

    fn alloc(&self) -> u32 {
        let name = self.next_name.get();
        self.next_name.set(name + 1);
        name
    }
}

impl Gl for RecordingGl {
    fn get_string(&self, name: InfoString) -> Option<String> {
        Some(format!("recording {name:?}"))
    }

    fn create_shader(&self, stage: ShaderStage) -> ShaderId {
        let id = ShaderId(self.alloc());
        self.record(GlCall::CreateShader(stage, id));
        id
    }

    fn shader_source(&self, shader: ShaderId, source: &str) {
        self.record(GlCall::ShaderSource(shader, source.to_owned()));
    }

    fn compile_shader(&self, shader: ShaderId) {
        self.record(GlCall::CompileShader(shader));
    }

    fn shader_compile_status(&self, _shader: ShaderId) -> bool {
        self.compile_ok.get()
    }

    fn shader_info_log(&self, shader: ShaderId) -> String {
        if self.compile_ok.get() {
            String::new()
        } else {
            format!("0:1(1): error: shader {} rejected", shader.0)
        }
    }

    fn delete_shader(&self, shader: ShaderId) {
        self.record(GlCall::DeleteShader(shader));
    }

    fn create_program(&self) -> ProgramId {
        let id = ProgramId(self.alloc());
        self.record(GlCall::CreateProgram(id));
        id
    }

    fn attach_shader(&self, program: ProgramId, shader: ShaderId) {
        self.record(GlCall::AttachShader(program, shader));
    }

    fn link_program(&self, program: ProgramId) {
        self.record(GlCall::LinkProgram(program));
    }

    fn program_link_status(&self, _program: ProgramId) -> bool {
        self.link_ok.get()
    }

    fn program_info_log(&self, program: ProgramId) -> String {
        if self.link_ok.get() {
            String::new()
        } else {
            format!("error: program {} failed to link", program.0)
        }
    }

    fn use_program(&self, program: ProgramId) {
        self.record(GlCall::UseProgram(program));
    }

    fn uniform_location(&self, program: ProgramId, name: &str) -> UniformLocation {
        self.record(GlCall::UniformLocation(program, name.to_owned()));
        self.uniforms
            .borrow()
            .get(name)
            .map_or(UniformLocation::INACTIVE, |&loc| UniformLocation(loc))
    }

    fn uniform_4f(&self, location: UniformLocation, value: [f32; 4]) {
        self.record(GlCall::Uniform4f(location, value));
    }

    fn gen_vertex_array(&self) -> VertexArrayId {
        let id = VertexArrayId(self.alloc());
        self.record(GlCall::GenVertexArray(id));
        id
    }

    fn bind_vertex_array(&self, vao: VertexArrayId) {
        self.record(GlCall::BindVertexArray(vao));
    }

    fn gen_buffer(&self) -> BufferId {
        let id = BufferId(self.alloc());
        self.record(GlCall::GenBuffer(id));
        id
    }

    fn bind_array_buffer(&self, buffer: BufferId) {
        self.record(GlCall::BindArrayBuffer(buffer));
    }

    fn buffer_data_static(&self, data: &[u8]) {
        self.record(GlCall::BufferDataStatic(data.to_vec()));
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, components: i32, stride: i32, offset: usize) {
        self.record(GlCall::VertexAttribPointerF32 {
            index,
            components,
            stride,
            offset,
        });
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(GlCall::EnableVertexAttribArray(index));
    }

    fn clear_color_buffer(&self) {
        self.record(GlCall::ClearColorBuffer);
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        self.record(GlCall::DrawTriangles { first, count });
    }
}
