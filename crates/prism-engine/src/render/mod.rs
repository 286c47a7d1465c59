//! GL object helpers: linked shader programs and write-once meshes.
//!
//! Everything here talks to the GPU through [`crate::gfx::Gl`] and assumes
//! the context that created the objects is current.

mod mesh;
mod shader;

pub use mesh::{Position, StaticMesh};
pub use shader::{ShaderProgram, ShaderSources};
