use std::mem::size_of;

use bytemuck::{Pod, Zeroable};

use crate::gfx::{Gl, VertexArrayId};

/// Vertex position in normalized device coordinates.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Attribute slot the position stream is bound to.
const POSITION_ATTRIB: u32 = 0;

/// Position-only mesh uploaded once with `STATIC_DRAW` and never modified.
///
/// The buffer is reached only through the vertex array, which records it as
/// the source of the position attribute.
#[derive(Debug)]
pub struct StaticMesh {
    vao: VertexArrayId,
    vertex_count: i32,
}

impl StaticMesh {
    pub fn upload(gl: &dyn Gl, positions: &[Position]) -> Self {
        let vao = gl.gen_vertex_array();
        gl.bind_vertex_array(vao);

        let vbo = gl.gen_buffer();
        gl.bind_array_buffer(vbo);
        gl.buffer_data_static(bytemuck::cast_slice(positions));

        // Tightly packed: three floats per vertex, no padding.
        gl.vertex_attrib_pointer_f32(POSITION_ATTRIB, 3, size_of::<Position>() as i32, 0);
        gl.enable_vertex_attrib_array(POSITION_ATTRIB);

        let vertex_count = i32::try_from(positions.len()).unwrap_or(i32::MAX);
        log::debug!("uploaded {vertex_count} vertices (vao {}, vbo {})", vao.0, vbo.0);

        Self { vao, vertex_count }
    }

    /// Binds the mesh's vertex array and draws every vertex as a triangle list.
    pub fn draw(&self, gl: &dyn Gl) {
        gl.bind_vertex_array(self.vao);
        gl.draw_triangles(0, self.vertex_count);
    }
}
