use crate::coords::{Affine2, Projection};
use crate::device::{Gpu, SurfaceErrorAction};
use crate::paint::Color;

use super::{Canvas, QuadInstance, QuadRenderer, RenderCtx, RenderTarget};

/// Outcome of the last `present` on a [`GpuCanvas`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PresentStatus {
    /// Nothing presented yet.
    Pending,
    Presented,
    /// The surface was unavailable; the frame was dropped.
    Skipped,
    /// The surface cannot recover; the application should exit.
    Fatal,
}

/// `Canvas` backed by the window surface.
///
/// Draw calls are batched on the CPU; `present` acquires the surface texture,
/// records one clear + instanced draw pass and submits it.
pub struct GpuCanvas<'a, 'w> {
    gpu: &'a mut Gpu<'w>,
    quads: &'a mut QuadRenderer,
    projection: Projection,
    clear: Color,
    batch: Vec<QuadInstance>,
    status: PresentStatus,
}

impl<'a, 'w> GpuCanvas<'a, 'w> {
    pub fn new(gpu: &'a mut Gpu<'w>, quads: &'a mut QuadRenderer, projection: Projection) -> Self {
        Self {
            gpu,
            quads,
            projection,
            clear: Color::BLACK,
            batch: Vec::new(),
            status: PresentStatus::Pending,
        }
    }

    pub fn status(&self) -> PresentStatus {
        self.status
    }
}

impl Canvas for GpuCanvas<'_, '_> {
    fn clear(&mut self, color: Color) {
        self.clear = color;
        self.batch.clear();
    }

    fn draw_quad(&mut self, transform: Affine2, color: Color) {
        self.batch.push(QuadInstance::new(transform, color));
    }

    fn present(&mut self) {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                self.batch.clear();
                self.status = match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => PresentStatus::Fatal,
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                        PresentStatus::Skipped
                    }
                };
                return;
            }
        };

        {
            let ctx = RenderCtx::new(
                self.gpu.device(),
                self.gpu.queue(),
                self.gpu.surface_format(),
                self.projection,
            );
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            self.quads.render(&ctx, &mut target, self.clear, &self.batch);
        }

        self.gpu.submit(frame);
        self.batch.clear();
        self.status = PresentStatus::Presented;
    }
}
