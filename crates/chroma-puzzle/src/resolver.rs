use crate::board::CellIndex;
use crate::config::PuzzleConfig;

/// Maps a pointer position (logical pixels, top-left origin) to the cell
/// under it, or `None` when the position is off the grid.
pub fn resolve(config: &PuzzleConfig, x: f32, y: f32) -> Option<CellIndex> {
    if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
        return None;
    }

    let col = (x / config.quad_width()).floor() as usize;
    let row = (y / config.quad_height()).floor() as usize;

    (col < config.columns && row < config.rows).then_some(CellIndex::new(col, row))
}
