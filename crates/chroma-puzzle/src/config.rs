//! Board geometry and scoring constants.

/// Window width in logical pixels.
pub const WIDTH: f32 = 800.0;
/// Window height in logical pixels.
pub const HEIGHT: f32 = 800.0;
pub const COLUMNS: usize = 10;
pub const ROWS: usize = 10;

/// Largest normalized color distance that still co-eliminates a cell.
pub const TOLERANCE: f64 = 0.2;
/// Points charged for every play on a visible cell.
pub const PLAY_COST: i64 = 5;
/// Points awarded per eliminated cell.
pub const CHAIN_MULTIPLIER: i64 = 2;

/// Puzzle configuration. `Default` is the classic 10x10 board on 800x800.
#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleConfig {
    pub width: f32,
    pub height: f32,
    pub columns: usize,
    pub rows: usize,
    pub tolerance: f64,
    pub play_cost: i64,
    pub chain_multiplier: i64,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            columns: COLUMNS,
            rows: ROWS,
            tolerance: TOLERANCE,
            play_cost: PLAY_COST,
            chain_multiplier: CHAIN_MULTIPLIER,
        }
    }
}

impl PuzzleConfig {
    /// Width of one cell in pixels.
    pub fn quad_width(&self) -> f32 {
        self.width / self.columns as f32
    }

    /// Height of one cell in pixels.
    pub fn quad_height(&self) -> f32 {
        self.height / self.rows as f32
    }

    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }
}
