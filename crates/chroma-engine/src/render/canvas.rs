use crate::coords::Affine2;
use crate::paint::Color;

/// Minimal immediate-mode 2D drawing contract.
///
/// A frame is `clear`, any number of `draw_quad`, then `present`. Calls made
/// after `present` belong to the next frame.
pub trait Canvas {
    /// Clears the whole target to `color`.
    fn clear(&mut self, color: Color);

    /// Fills the unit square centered at the origin (corners at ±0.5) after
    /// mapping it through `transform`.
    fn draw_quad(&mut self, transform: Affine2, color: Color);

    /// Finishes the frame and shows it.
    fn present(&mut self);
}

/// One recorded canvas call.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOp {
    Clear(Color),
    Quad { transform: Affine2, color: Color },
    Present,
}

/// Software canvas that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<CanvasOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Number of `present` calls so far.
    pub fn frames(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, CanvasOp::Present)).count()
    }

    /// Quads of the most recently presented frame.
    pub fn last_frame_quads(&self) -> Vec<(Affine2, Color)> {
        let end = self
            .ops
            .iter()
            .rposition(|op| matches!(op, CanvasOp::Present))
            .unwrap_or(self.ops.len());
        let start = self.ops[..end]
            .iter()
            .rposition(|op| matches!(op, CanvasOp::Present))
            .map_or(0, |i| i + 1);

        self.ops[start..end]
            .iter()
            .filter_map(|op| match op {
                CanvasOp::Quad { transform, color } => Some((*transform, *color)),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) {
        self.ops.push(CanvasOp::Clear(color));
    }

    fn draw_quad(&mut self, transform: Affine2, color: Color) {
        self.ops.push(CanvasOp::Quad { transform, color });
    }

    fn present(&mut self) {
        self.ops.push(CanvasOp::Present);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    #[test]
    fn records_calls_in_order() {
        let mut canvas = RecordingCanvas::new();
        canvas.clear(Color::BLACK);
        canvas.draw_quad(Affine2::IDENTITY, Color::WHITE);
        canvas.present();

        assert_eq!(
            canvas.ops(),
            &[
                CanvasOp::Clear(Color::BLACK),
                CanvasOp::Quad { transform: Affine2::IDENTITY, color: Color::WHITE },
                CanvasOp::Present,
            ]
        );
        assert_eq!(canvas.frames(), 1);
    }

    #[test]
    fn last_frame_quads_only_returns_latest_frame() {
        let mut canvas = RecordingCanvas::new();
        canvas.clear(Color::BLACK);
        canvas.draw_quad(Affine2::IDENTITY, Color::WHITE);
        canvas.present();

        let moved = Affine2::translation(Vec2::new(1.0, 2.0));
        canvas.clear(Color::BLACK);
        canvas.draw_quad(moved, Color::BLACK);
        canvas.present();

        assert_eq!(canvas.last_frame_quads(), vec![(moved, Color::BLACK)]);
        assert_eq!(canvas.frames(), 2);
    }

    #[test]
    fn unpresented_frame_is_not_reported() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_quad(Affine2::IDENTITY, Color::WHITE);
        canvas.present();
        canvas.draw_quad(Affine2::IDENTITY, Color::BLACK);

        assert_eq!(canvas.last_frame_quads(), vec![(Affine2::IDENTITY, Color::WHITE)]);
    }
}
