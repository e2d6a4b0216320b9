//! Chroma engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the puzzle: the winit window
//! loop, the wgpu device/surface, platform-agnostic input, frame timing, and
//! the quad-drawing [`render::Canvas`] contract.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;

mod error;

pub use error::EngineError;
