/// Name of a shader object.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShaderId(pub u32);

/// Name of a program object.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ProgramId(pub u32);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct VertexArrayId(pub u32);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BufferId(pub u32);

/// Uniform slot in a linked program.
///
/// GL reports `-1` for names that are missing or optimized away. Uploads to
/// that location are silently ignored by GL, so it is kept as-is rather than
/// turned into an error.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct UniformLocation(pub i32);

impl UniformLocation {
    pub const INACTIVE: Self = Self(-1);

    #[inline]
    pub fn is_active(self) -> bool {
        self.0 >= 0
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn label(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

/// Strings queryable through `glGetString`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InfoString {
    Vendor,
    Renderer,
    Version,
    ShadingLanguageVersion,
}
