//! Prism engine crate.
//!
//! Owns the window runtime, the GL context and the small set of GL object
//! helpers the triangle demo is built from.

pub mod core;
pub mod device;
pub mod gfx;
pub mod logging;
pub mod paint;
pub mod render;
pub mod time;
pub mod window;
