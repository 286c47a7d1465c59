//! Color values handed to shaders.

pub mod color;

pub use color::Color;
