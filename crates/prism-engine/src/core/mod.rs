//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the app
//! built on it: one setup call once GL is ready, then one call per frame.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, InitCtx};
