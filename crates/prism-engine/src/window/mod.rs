//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the GL window, and drives the app once per
//! redraw until the window is asked to close.

mod placement;
mod runtime;

pub use placement::centered_position;
pub use runtime::{LoopState, Runtime, RuntimeConfig};
