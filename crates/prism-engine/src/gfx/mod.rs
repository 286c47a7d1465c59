//! OpenGL access.
//!
//! The engine and the apps built on it never call the generated bindings
//! directly. They go through [`Gl`], which covers exactly the entry points a
//! static-mesh, single-program renderer needs. [`NativeGl`] forwards to the
//! loaded function table; `RecordingGl` (feature `testing`) records calls so
//! setup and frame logic can be checked without a display.

mod native;
#[cfg(any(test, feature = "testing"))]
mod recording;
mod types;

pub use native::NativeGl;
#[cfg(any(test, feature = "testing"))]
pub use recording::{GlCall, RecordingGl};
pub use types::{
    BufferId, InfoString, ProgramId, ShaderId, ShaderStage, UniformLocation, VertexArrayId,
};

/// The subset of OpenGL 3.3 core used by the renderer.
///
/// Methods take `&self`: GL state lives in the current context, not in the
/// implementor.
pub trait Gl {
    fn get_string(&self, name: InfoString) -> Option<String>;

    // shaders
    fn create_shader(&self, stage: ShaderStage) -> ShaderId;
    fn shader_source(&self, shader: ShaderId, source: &str);
    fn compile_shader(&self, shader: ShaderId);
    fn shader_compile_status(&self, shader: ShaderId) -> bool;
    fn shader_info_log(&self, shader: ShaderId) -> String;
    fn delete_shader(&self, shader: ShaderId);

    // programs
    fn create_program(&self) -> ProgramId;
    fn attach_shader(&self, program: ProgramId, shader: ShaderId);
    fn link_program(&self, program: ProgramId);
    fn program_link_status(&self, program: ProgramId) -> bool;
    fn program_info_log(&self, program: ProgramId) -> String;
    fn use_program(&self, program: ProgramId);
    fn uniform_location(&self, program: ProgramId, name: &str) -> UniformLocation;
    fn uniform_4f(&self, location: UniformLocation, value: [f32; 4]);

    // vertex data
    fn gen_vertex_array(&self) -> VertexArrayId;
    fn bind_vertex_array(&self, vao: VertexArrayId);
    fn gen_buffer(&self) -> BufferId;
    fn bind_array_buffer(&self, buffer: BufferId);
    /// Uploads `data` into the bound `ARRAY_BUFFER` with `STATIC_DRAW` usage.
    fn buffer_data_static(&self, data: &[u8]);
    /// Describes attribute `index` as `components` non-normalized floats.
    fn vertex_attrib_pointer_f32(&self, index: u32, components: i32, stride: i32, offset: usize);
    fn enable_vertex_attrib_array(&self, index: u32);

    // drawing
    fn clear_color_buffer(&self);
    fn draw_triangles(&self, first: i32, count: i32);
}
