/// Context-creation hints.
///
/// The defaults request what the triangle demo needs: a 3.3 core-profile,
/// double-buffered context with vsync.
#[derive(Debug, Clone)]
pub struct GlInit {
    /// Requested `(major, minor)` OpenGL version.
    pub version: (u8, u8),

    /// Core profile when `true`, compatibility profile otherwise.
    pub core_profile: bool,

    pub double_buffer: bool,

    /// Ask for a swap interval of one frame.
    ///
    /// Treated as a hint; if the platform refuses it, rendering continues
    /// without vsync.
    pub vsync: bool,
}

impl Default for GlInit {
    fn default() -> Self {
        Self {
            version: (3, 3),
            core_profile: true,
            double_buffer: true,
            vsync: true,
        }
    }
}
