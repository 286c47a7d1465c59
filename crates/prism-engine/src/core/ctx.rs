use crate::gfx::Gl;
use crate::time::FrameTime;

/// Context passed to `core::App::on_init`.
pub struct InitCtx<'a> {
    pub gl: &'a dyn Gl,
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// `'a` is the duration of the callback invocation.
pub struct FrameCtx<'a> {
    pub gl: &'a dyn Gl,
    pub time: FrameTime,
}

impl FrameCtx<'_> {
    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.time.frame_index
    }
}
