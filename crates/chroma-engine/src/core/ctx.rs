use winit::window::Window;

use crate::coords::{Projection, Viewport};
use crate::device::Gpu;
use crate::input::{InputFrame, InputState};
use crate::render::{GpuCanvas, QuadRenderer};
use crate::time::FrameTime;

/// Window handle and metadata for the current frame.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub input: &'a InputState,
    /// Input queued since the previous frame, in arrival order.
    pub input_frame: &'a InputFrame,
    pub time: FrameTime,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Opens a canvas on the window surface whose coordinate space is
    /// `space`, projected orthographically onto the whole surface.
    pub fn canvas<'c>(&'c mut self, quads: &'c mut QuadRenderer, space: Viewport) -> GpuCanvas<'c, 'w> {
        GpuCanvas::new(self.gpu, quads, Projection::orthographic(space))
    }
}
