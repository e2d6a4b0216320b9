use std::ops::{Index, IndexMut};

use thiserror::Error;

use crate::color::{normalized_distance, ColorSource, Rgb};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell ({col}, {row}) is outside the {columns}x{rows} board")]
    OutOfBounds {
        col: usize,
        row: usize,
        columns: usize,
        rows: usize,
    },
    #[error("board needs {expected} cells, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("expected a {columns}x{rows} board, got {board_columns}x{board_rows}")]
    GridMismatch {
        columns: usize,
        rows: usize,
        board_columns: usize,
        board_rows: usize,
    },
}

/// Grid position `(column, row)`; column 0 is the left edge, row 0 the top.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CellIndex {
    pub col: usize,
    pub row: usize,
}

impl CellIndex {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// One grid position. Eliminated cells keep their color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cell {
    pub color: Rgb,
    pub visible: bool,
}

impl Cell {
    pub const fn new(color: Rgb) -> Self {
        Self {
            color,
            visible: true,
        }
    }
}

/// Fixed-size grid of cells, stored column by column.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Fresh board: every cell visible, colors drawn from `colors` column by
    /// column.
    pub fn generate<S: ColorSource + ?Sized>(columns: usize, rows: usize, colors: &mut S) -> Self {
        let cells = (0..columns * rows)
            .map(|_| Cell::new(colors.next_color()))
            .collect();
        Self {
            columns,
            rows,
            cells,
        }
    }

    /// Board with the given colors in column-major order, all visible.
    pub fn from_colors(
        columns: usize,
        rows: usize,
        colors: impl IntoIterator<Item = Rgb>,
    ) -> Result<Self, BoardError> {
        let cells: Vec<Cell> = colors.into_iter().map(Cell::new).collect();
        if cells.len() != columns * rows {
            return Err(BoardError::ShapeMismatch {
                expected: columns * rows,
                actual: cells.len(),
            });
        }
        Ok(Self {
            columns,
            rows,
            cells,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of cells; constant for the life of the board.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, index: CellIndex) -> bool {
        index.col < self.columns && index.row < self.rows
    }

    /// Checks `index` against the grid.
    pub fn check(&self, index: CellIndex) -> Result<CellIndex, BoardError> {
        if self.contains(index) {
            Ok(index)
        } else {
            Err(BoardError::OutOfBounds {
                col: index.col,
                row: index.row,
                columns: self.columns,
                rows: self.rows,
            })
        }
    }

    pub fn cell_at(&self, col: usize, row: usize) -> Result<&Cell, BoardError> {
        let index = self.check(CellIndex::new(col, row))?;
        Ok(&self[index])
    }

    pub fn cell_at_mut(&mut self, col: usize, row: usize) -> Result<&mut Cell, BoardError> {
        let index = self.check(CellIndex::new(col, row))?;
        Ok(&mut self[index])
    }

    /// True iff no cell is visible.
    pub fn all_hidden(&self) -> bool {
        self.cells.iter().all(|c| !c.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.cells.iter().filter(|c| c.visible).count()
    }

    /// Cells with their indices, column by column.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, &Cell)> + '_ {
        let rows = self.rows;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (CellIndex::new(i / rows, i % rows), c))
    }

    /// Hides every cell whose color is within `tolerance` (normalized, inclusive)
    /// of `target` and returns how many matched.
    ///
    /// Already-hidden cells are tested and counted like visible ones.
    pub fn eliminate_within(&mut self, target: Rgb, tolerance: f64) -> usize {
        let mut chain = 0;
        for cell in &mut self.cells {
            if normalized_distance(target, cell.color) <= tolerance {
                cell.visible = false;
                chain += 1;
            }
        }
        chain
    }

    fn offset(&self, index: CellIndex) -> usize {
        index.col * self.rows + index.row
    }
}

/// Infallible access for indices already validated against this board.
///
/// # Panics
/// Panics when `index` is outside the grid.
impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Cell {
        assert!(self.contains(index), "cell {index:?} outside the board");
        &self.cells[self.offset(index)]
    }
}

impl IndexMut<CellIndex> for Board {
    fn index_mut(&mut self, index: CellIndex) -> &mut Cell {
        assert!(self.contains(index), "cell {index:?} outside the board");
        let offset = self.offset(index);
        &mut self.cells[offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{RandomColors, ScriptedColors};

    fn gray(v: f64) -> Rgb {
        Rgb::new(v, v, v)
    }

    // ── generate ──────────────────────────────────────────────────────────

    #[test]
    fn generated_board_is_full_and_visible() {
        let board = Board::generate(10, 10, &mut RandomColors::seeded(5));
        assert_eq!(board.len(), 100);
        assert_eq!(board.visible_count(), 100);
        assert!(board.iter().all(|(_, c)| c.color.in_unit_cube()));
    }

    #[test]
    fn generation_fills_column_by_column() {
        let colors: Vec<Rgb> = (0..6).map(|i| gray(i as f64 / 10.0)).collect();
        let board = Board::generate(2, 3, &mut ScriptedColors::new(colors.clone()));

        assert_eq!(board.cell_at(0, 0).unwrap().color, colors[0]);
        assert_eq!(board.cell_at(0, 2).unwrap().color, colors[2]);
        assert_eq!(board.cell_at(1, 0).unwrap().color, colors[3]);
        assert_eq!(board.cell_at(1, 2).unwrap().color, colors[5]);
    }

    #[test]
    fn from_colors_rejects_wrong_shape() {
        let err = Board::from_colors(2, 2, [gray(0.0); 3]).unwrap_err();
        assert_eq!(err, BoardError::ShapeMismatch { expected: 4, actual: 3 });
    }

    // ── cell_at ───────────────────────────────────────────────────────────

    #[test]
    fn cell_at_out_of_bounds() {
        let board = Board::generate(10, 10, &mut RandomColors::seeded(0));
        assert_eq!(
            board.cell_at(10, 0).unwrap_err(),
            BoardError::OutOfBounds { col: 10, row: 0, columns: 10, rows: 10 }
        );
        assert!(board.cell_at(0, 10).is_err());
        assert!(board.cell_at(9, 9).is_ok());
    }

    #[test]
    fn cell_at_mut_changes_one_cell() {
        let mut board = Board::from_colors(2, 2, [gray(0.5); 4]).unwrap();
        board.cell_at_mut(1, 1).unwrap().visible = false;

        assert!(!board[CellIndex::new(1, 1)].visible);
        assert_eq!(board.visible_count(), 3);
    }

    #[test]
    #[should_panic(expected = "outside the board")]
    fn index_panics_out_of_bounds() {
        let board = Board::from_colors(1, 1, [gray(0.5)]).unwrap();
        let _ = board[CellIndex::new(0, 1)];
    }

    // ── all_hidden ────────────────────────────────────────────────────────

    #[test]
    fn all_hidden_only_when_every_cell_hidden() {
        let mut board = Board::from_colors(1, 2, [gray(0.1), gray(0.9)]).unwrap();
        assert!(!board.all_hidden());

        board.cell_at_mut(0, 0).unwrap().visible = false;
        assert!(!board.all_hidden());

        board.cell_at_mut(0, 1).unwrap().visible = false;
        assert!(board.all_hidden());
    }

    // ── iter ──────────────────────────────────────────────────────────────

    #[test]
    fn iter_yields_every_index_once() {
        let board = Board::generate(3, 4, &mut RandomColors::seeded(9));
        let mut seen: Vec<CellIndex> = board.iter().map(|(i, _)| i).collect();
        seen.sort_by_key(|i| (i.col, i.row));
        seen.dedup();
        assert_eq!(seen.len(), 12);
        assert!(seen.iter().all(|i| board.contains(*i)));
    }

    // ── eliminate_within ──────────────────────────────────────────────────

    #[test]
    fn elimination_counts_and_hides_matches() {
        let mut board = Board::from_colors(1, 3, [gray(0.0), gray(0.05), gray(1.0)]).unwrap();
        let chain = board.eliminate_within(gray(0.0), 0.2);

        assert_eq!(chain, 2);
        assert!(!board[CellIndex::new(0, 0)].visible);
        assert!(!board[CellIndex::new(0, 1)].visible);
        assert!(board[CellIndex::new(0, 2)].visible);
    }

    #[test]
    fn elimination_counts_hidden_matches_too() {
        let mut board = Board::from_colors(1, 2, [gray(0.5), gray(0.5)]).unwrap();
        board.cell_at_mut(0, 1).unwrap().visible = false;

        assert_eq!(board.eliminate_within(gray(0.5), 0.2), 2);
    }

    #[test]
    fn elimination_keeps_colors() {
        let mut board = Board::from_colors(1, 1, [gray(0.3)]).unwrap();
        board.eliminate_within(gray(0.3), 0.0);
        assert_eq!(board[CellIndex::new(0, 0)].color, gray(0.3));
    }
}
