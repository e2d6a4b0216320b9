//! Coordinate and geometry types shared by the renderer and the games.
//!
//! Canonical CPU space:
//! - logical pixels (DPI-aware)
//! - origin top-left
//! - +X right, +Y down
//!
//! `Projection` maps that space to clip space for the shaders.

mod affine;
mod projection;
mod vec2;
mod viewport;

pub use affine::Affine2;
pub use projection::Projection;
pub use vec2::Vec2;
pub use viewport::Viewport;
