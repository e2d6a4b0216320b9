//! Board-to-canvas drawing.

use chroma_engine::coords::{Affine2, Vec2};
use chroma_engine::paint::Color;
use chroma_engine::render::Canvas;

use crate::board::{Board, Cell, CellIndex};
use crate::config::PuzzleConfig;

/// Draws a board as a grid of filled cells.
///
/// Each frame is one clear to black, one quad per cell in column-major order,
/// then a present. Hidden cells are drawn in the clear color, so they read as
/// holes.
#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    cell_size: Vec2,
    background: Color,
}

impl Presenter {
    pub fn new(config: &PuzzleConfig) -> Self {
        Self {
            cell_size: Vec2::new(config.quad_width(), config.quad_height()),
            background: Color::BLACK,
        }
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Maps the unit quad onto the cell's rectangle in window coordinates.
    pub fn cell_transform(&self, index: CellIndex) -> Affine2 {
        let center = Vec2::new(
            (index.col as f32 + 0.5) * self.cell_size.x,
            (index.row as f32 + 0.5) * self.cell_size.y,
        );
        Affine2::from_center_size(center, self.cell_size)
    }

    pub fn fill_color(&self, cell: &Cell) -> Color {
        if cell.visible {
            cell.color.into()
        } else {
            self.background
        }
    }

    pub fn draw(&self, board: &Board, canvas: &mut impl Canvas) {
        canvas.clear(self.background);
        for (index, cell) in board.iter() {
            canvas.draw_quad(self.cell_transform(index), self.fill_color(cell));
        }
        canvas.present();
    }
}
