//! Paint model shared between the games and the renderer.
//!
//! Colors are linear RGBA with premultiplied alpha; geometry lives in `coords`.

pub mod color;

pub use color::Color;
