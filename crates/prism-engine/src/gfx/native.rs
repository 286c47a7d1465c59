use std::ffi::{CStr, CString, c_void};
use std::marker::PhantomData;

use gl::types::{GLchar, GLenum, GLint, GLsizei, GLsizeiptr};

use super::{
    BufferId, Gl, InfoString, ProgramId, ShaderId, ShaderStage, UniformLocation, VertexArrayId,
};

/// [`Gl`] backed by the process-wide function table of the `gl` crate.
///
/// Only obtainable through [`NativeGl::load_with`]; holding one means the
/// table was loaded while a context was current on this thread. The marker
/// keeps it `!Send` so it cannot leave that thread.
#[derive(Debug)]
pub struct NativeGl {
    _thread_bound: PhantomData<*const ()>,
}

impl NativeGl {
    /// Loads every GL entry point through `loader`.
    ///
    /// # Safety
    ///
    /// A GL context must be current on the calling thread, and every
    /// subsequent call through the returned value must happen on this thread
    /// while that context (or a compatible one) is still current.
    pub unsafe fn load_with<F>(loader: F) -> Self
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        gl::load_with(loader);
        Self {
            _thread_bound: PhantomData,
        }
    }
}

fn stage_enum(stage: ShaderStage) -> GLenum {
    match stage {
        ShaderStage::Vertex => gl::VERTEX_SHADER,
        ShaderStage::Fragment => gl::FRAGMENT_SHADER,
    }
}

fn info_string_enum(name: InfoString) -> GLenum {
    match name {
        InfoString::Vendor => gl::VENDOR,
        InfoString::Renderer => gl::RENDERER,
        InfoString::Version => gl::VERSION,
        InfoString::ShadingLanguageVersion => gl::SHADING_LANGUAGE_VERSION,
    }
}

/// Reads an info log of `len` bytes (including the terminator) via `fetch`.
fn read_info_log(len: GLint, fetch: impl FnOnce(GLsizei, *mut GLsizei, *mut GLchar)) -> String {
    if len <= 0 {
        return String::new();
    }

    let mut buf = vec![0u8; len as usize];
    let mut written: GLsizei = 0;
    fetch(len, &mut written as *mut GLsizei, buf.as_mut_ptr().cast());
    buf.truncate(written.clamp(0, len) as usize);

    String::from_utf8_lossy(&buf).trim_end().to_owned()
}

// SAFETY (all methods): `NativeGl` exists only after `load_with`, whose
// contract guarantees a current context on this thread.
impl Gl for NativeGl {
    fn get_string(&self, name: InfoString) -> Option<String> {
        let ptr = unsafe { gl::GetString(info_string_enum(name)) };
        if ptr.is_null() {
            return None;
        }
        let s = unsafe { CStr::from_ptr(ptr.cast()) };
        Some(s.to_string_lossy().into_owned())
    }

    fn create_shader(&self, stage: ShaderStage) -> ShaderId {
        ShaderId(unsafe { gl::CreateShader(stage_enum(stage)) })
    }

    fn shader_source(&self, shader: ShaderId, source: &str) {
        // Length-delimited, so the source needs no NUL terminator.
        let ptr = source.as_ptr().cast::<GLchar>();
        let len = GLint::try_from(source.len()).unwrap_or(GLint::MAX);
        unsafe { gl::ShaderSource(shader.0, 1, &ptr, &len) };
    }

    fn compile_shader(&self, shader: ShaderId) {
        unsafe { gl::CompileShader(shader.0) };
    }

    fn shader_compile_status(&self, shader: ShaderId) -> bool {
        let mut status: GLint = 0;
        unsafe { gl::GetShaderiv(shader.0, gl::COMPILE_STATUS, &mut status) };
        status == GLint::from(gl::TRUE)
    }

    fn shader_info_log(&self, shader: ShaderId) -> String {
        let mut len: GLint = 0;
        unsafe { gl::GetShaderiv(shader.0, gl::INFO_LOG_LENGTH, &mut len) };
        read_info_log(len, |cap, written, buf| unsafe {
            gl::GetShaderInfoLog(shader.0, cap, written, buf)
        })
    }

    fn delete_shader(&self, shader: ShaderId) {
        unsafe { gl::DeleteShader(shader.0) };
    }

    fn create_program(&self) -> ProgramId {
        ProgramId(unsafe { gl::CreateProgram() })
    }

    fn attach_shader(&self, program: ProgramId, shader: ShaderId) {
        unsafe { gl::AttachShader(program.0, shader.0) };
    }

    fn link_program(&self, program: ProgramId) {
        unsafe { gl::LinkProgram(program.0) };
    }

    fn program_link_status(&self, program: ProgramId) -> bool {
        let mut status: GLint = 0;
        unsafe { gl::GetProgramiv(program.0, gl::LINK_STATUS, &mut status) };
        status == GLint::from(gl::TRUE)
    }

    fn program_info_log(&self, program: ProgramId) -> String {
        let mut len: GLint = 0;
        unsafe { gl::GetProgramiv(program.0, gl::INFO_LOG_LENGTH, &mut len) };
        read_info_log(len, |cap, written, buf| unsafe {
            gl::GetProgramInfoLog(program.0, cap, written, buf)
        })
    }

    fn use_program(&self, program: ProgramId) {
        unsafe { gl::UseProgram(program.0) };
    }

    fn uniform_location(&self, program: ProgramId, name: &str) -> UniformLocation {
        let Ok(name) = CString::new(name) else {
            return UniformLocation::INACTIVE;
        };
        UniformLocation(unsafe { gl::GetUniformLocation(program.0, name.as_ptr()) })
    }

    fn uniform_4f(&self, location: UniformLocation, [x, y, z, w]: [f32; 4]) {
        unsafe { gl::Uniform4f(location.0, x, y, z, w) };
    }

    fn gen_vertex_array(&self) -> VertexArrayId {
        let mut id = 0;
        unsafe { gl::GenVertexArrays(1, &mut id) };
        VertexArrayId(id)
    }

    fn bind_vertex_array(&self, vao: VertexArrayId) {
        unsafe { gl::BindVertexArray(vao.0) };
    }

    fn gen_buffer(&self) -> BufferId {
        let mut id = 0;
        unsafe { gl::GenBuffers(1, &mut id) };
        BufferId(id)
    }

    fn bind_array_buffer(&self, buffer: BufferId) {
        unsafe { gl::BindBuffer(gl::ARRAY_BUFFER, buffer.0) };
    }

    fn buffer_data_static(&self, data: &[u8]) {
        unsafe {
            gl::BufferData(
                gl::ARRAY_BUFFER,
                data.len() as GLsizeiptr,
                data.as_ptr().cast(),
                gl::STATIC_DRAW,
            )
        };
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, components: i32, stride: i32, offset: usize) {
        unsafe {
            gl::VertexAttribPointer(
                index,
                components,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset as *const c_void,
            )
        };
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { gl::EnableVertexAttribArray(index) };
    }

    fn clear_color_buffer(&self) {
        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT) };
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        unsafe { gl::DrawArrays(gl::TRIANGLES, first, count) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_log_stops_at_written_length() {
        let log = read_info_log(16, |cap, written, buf| {
            assert_eq!(cap, 16);
            let msg = b"0:1: error\n";
            unsafe {
                std::ptr::copy_nonoverlapping(msg.as_ptr().cast(), buf, msg.len());
                *written = msg.len() as GLsizei;
            }
        });
        assert_eq!(log, "0:1: error");
    }

    #[test]
    fn empty_info_log_skips_fetch() {
        let log = read_info_log(0, |_, _, _| panic!("fetch must not run"));
        assert!(log.is_empty());
    }
}
