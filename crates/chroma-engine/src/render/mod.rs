//! GPU rendering subsystem.
//!
//! The games draw through the [`Canvas`] contract: clear, draw unit-square
//! quads under 2D affine transforms, present. Two backends implement it:
//! - [`GpuCanvas`] batches quads and submits them through [`QuadRenderer`]
//! - [`RecordingCanvas`] records the calls, for tests and headless runs
//!
//! Convention: CPU geometry is in logical pixels (top-left origin, +Y down);
//! the vertex shader applies the orthographic projection uniform.

mod canvas;
mod ctx;
mod gpu_canvas;
mod quad;
mod shader;

pub use canvas::{Canvas, CanvasOp, RecordingCanvas};
pub use ctx::{RenderCtx, RenderTarget};
pub use gpu_canvas::{GpuCanvas, PresentStatus};
pub use quad::{QuadInstance, QuadRenderer};
pub use shader::compile_wgsl;
