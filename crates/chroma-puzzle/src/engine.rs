//! Puzzle state machine: pending selection, elimination, scoring, restart.

use crate::board::{Board, BoardError, CellIndex};
use crate::color::ColorSource;
use crate::config::PuzzleConfig;

/// Everything that changes during a game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub board: Board,
    pub score: i64,
    /// Click waiting for the next tick; a newer click replaces it.
    pub pending_selection: Option<CellIndex>,
}

/// What a single `tick` did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// No selection was pending.
    Idle,
    /// The selected cell was already eliminated; nothing was charged.
    Ignored { cell: CellIndex },
    /// A play ran and the game goes on.
    Played {
        cell: CellIndex,
        chain: usize,
        score: i64,
    },
    /// A play cleared the board. The board has already been regenerated and
    /// the score reset; `final_score` is the score the game ended with.
    GameEnded {
        cell: CellIndex,
        chain: usize,
        final_score: i64,
    },
}

impl TickOutcome {
    pub fn game_ended(&self) -> Option<i64> {
        match self {
            TickOutcome::GameEnded { final_score, .. } => Some(*final_score),
            _ => None,
        }
    }
}

/// Color-matching puzzle engine.
///
/// Owns the single `GameState`; the frame loop lends it out by `&mut` for
/// `submit` and `tick`, and by `&` for drawing.
#[derive(Debug)]
pub struct PuzzleEngine<S> {
    config: PuzzleConfig,
    colors: S,
    state: GameState,
    games_finished: u64,
}

impl<S: ColorSource> PuzzleEngine<S> {
    /// Starts a game on a freshly generated board.
    pub fn new(config: PuzzleConfig, mut colors: S) -> Self {
        let board = Board::generate(config.columns, config.rows, &mut colors);
        Self::from_parts(config, colors, board)
    }

    /// Starts a game on a prepared board. Later restarts draw from `colors`.
    pub fn with_board(config: PuzzleConfig, colors: S, board: Board) -> Result<Self, BoardError> {
        if board.columns() != config.columns || board.rows() != config.rows {
            return Err(BoardError::GridMismatch {
                columns: config.columns,
                rows: config.rows,
                board_columns: board.columns(),
                board_rows: board.rows(),
            });
        }
        Ok(Self::from_parts(config, colors, board))
    }

    fn from_parts(config: PuzzleConfig, colors: S, board: Board) -> Self {
        Self {
            config,
            colors,
            state: GameState {
                board,
                score: 0,
                pending_selection: None,
            },
            games_finished: 0,
        }
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn score(&self) -> i64 {
        self.state.score
    }

    pub fn pending(&self) -> Option<CellIndex> {
        self.state.pending_selection
    }

    /// Games cleared since the engine was created.
    pub fn games_finished(&self) -> u64 {
        self.games_finished
    }

    /// Records `index` as the pending selection, replacing any unprocessed one.
    ///
    /// No elimination happens here; that waits for `tick`.
    pub fn submit(&mut self, index: CellIndex) -> Result<(), BoardError> {
        let index = self.state.board.check(index)?;
        if let Some(previous) = self.state.pending_selection.replace(index) {
            log::trace!("selection {previous:?} replaced by {index:?}");
        }
        Ok(())
    }

    /// Per-frame step: consumes the pending selection, if any.
    ///
    /// Leaves `pending_selection` empty on return.
    pub fn tick(&mut self) -> TickOutcome {
        let Some(cell) = self.state.pending_selection.take() else {
            return TickOutcome::Idle;
        };

        let selected = self.state.board[cell];
        if !selected.visible {
            log::trace!("cell {cell:?} already eliminated; ignored");
            return TickOutcome::Ignored { cell };
        }

        self.state.score -= self.config.play_cost;
        self.state.board[cell].visible = false;

        let chain = self
            .state
            .board
            .eliminate_within(selected.color, self.config.tolerance);
        let reward = chain as i64 * self.config.chain_multiplier;
        self.state.score += reward;

        log::debug!(
            "play at ({}, {}): chain {chain}, delta {:+}, score {}",
            cell.col,
            cell.row,
            reward - self.config.play_cost,
            self.state.score
        );

        if !self.state.board.all_hidden() {
            return TickOutcome::Played {
                cell,
                chain,
                score: self.state.score,
            };
        }

        let final_score = self.state.score;
        self.games_finished += 1;
        log::info!("board cleared with {final_score} points; restarting");
        self.restart();

        TickOutcome::GameEnded {
            cell,
            chain,
            final_score,
        }
    }

    /// Regenerates the board and resets the score.
    pub fn restart(&mut self) {
        self.state.board = Board::generate(self.config.columns, self.config.rows, &mut self.colors);
        self.state.score = 0;
        self.state.pending_selection = None;
    }
}
