//! Color-matching grid puzzle.
//!
//! A grid of randomly colored cells; clicking one eliminates every cell whose
//! color lies within a normalized RGB tolerance of it. Each play costs a fixed
//! amount and pays per eliminated cell. Clearing the board ends the game and
//! starts a fresh one.
//!
//! The pieces, bottom-up:
//! - [`color`]: `Rgb`, distances, and the `ColorSource` generators
//! - [`board`]: the column-major cell grid and tolerance elimination
//! - [`resolver`]: window pixel to cell index
//! - [`engine`]: pending selection, scoring, game end and restart
//! - [`presenter`]: board drawing through a `chroma_engine` canvas
//! - [`app`]: the frame loop glue implementing `chroma_engine::core::App`

pub mod app;
pub mod board;
pub mod color;
pub mod config;
pub mod engine;
pub mod presenter;
pub mod resolver;

pub use app::{announce, PuzzleApp};
pub use board::{Board, BoardError, Cell, CellIndex};
pub use color::{ColorSource, RandomColors, Rgb, ScriptedColors};
pub use config::PuzzleConfig;
pub use engine::{GameState, PuzzleEngine, TickOutcome};
pub use presenter::Presenter;
pub use resolver::resolve;
