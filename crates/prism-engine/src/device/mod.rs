//! GL context bootstrap.
//!
//! This module is responsible for:
//! - creating the window together with a matching GL display/config
//! - creating the context with the requested version/profile and making it current
//! - loading GL entry points and presenting frames

mod context;
mod init;

pub use context::GlContext;
pub use init::GlInit;
