//! Whole-game scenarios driven through the public API with scripted colors.

use chroma_engine::paint::Color;
use chroma_engine::render::{CanvasOp, RecordingCanvas};
use chroma_puzzle::color::MAX_DISTANCE;
use chroma_puzzle::config::{HEIGHT, TOLERANCE, WIDTH};
use chroma_puzzle::{
    resolve, Board, CellIndex, Presenter, PuzzleConfig, PuzzleEngine, Rgb, ScriptedColors,
    TickOutcome,
};

fn gray(v: f64) -> Rgb {
    Rgb::new(v, v, v)
}

/// Mid-gray board with a black cell at (0, 0) and a white one at (1, 0).
///
/// Both corners are further than the tolerance from everything else.
fn corner_colors() -> Vec<Rgb> {
    let mut colors = vec![gray(0.5); 100];
    colors[0] = gray(0.0);
    colors[10] = gray(1.0);
    colors
}

fn engine_on(colors: Vec<Rgb>, restarts: ScriptedColors) -> PuzzleEngine<ScriptedColors> {
    let config = PuzzleConfig::default();
    let board = Board::from_colors(config.columns, config.rows, colors).unwrap();
    PuzzleEngine::with_board(config, restarts, board).unwrap()
}

fn click(engine: &mut PuzzleEngine<ScriptedColors>, x: f32, y: f32) -> TickOutcome {
    if let Some(cell) = resolve(engine.config(), x, y) {
        engine.submit(cell).unwrap();
    }
    engine.tick()
}

#[test]
fn lone_match_play() {
    let mut engine = engine_on(corner_colors(), ScriptedColors::default());

    let outcome = click(&mut engine, 0.0, 0.0);

    assert_eq!(
        outcome,
        TickOutcome::Played { cell: CellIndex::new(0, 0), chain: 1, score: -3 }
    );
    assert!(!engine.board()[CellIndex::new(0, 0)].visible);
    assert_eq!(engine.board().visible_count(), 99);
}

#[test]
fn full_chain_sweep_ends_and_restarts() {
    let mut engine = engine_on(vec![gray(0.5); 100], ScriptedColors::new(corner_colors()));

    let outcome = click(&mut engine, 400.0, 400.0);

    assert_eq!(
        outcome,
        TickOutcome::GameEnded { cell: CellIndex::new(5, 5), chain: 100, final_score: 195 }
    );
    assert_eq!(engine.games_finished(), 1);

    // Next frame sees the fresh game.
    assert_eq!(engine.tick(), TickOutcome::Idle);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.board().visible_count(), 100);
    assert_eq!(engine.board()[CellIndex::new(0, 1)].color, corner_colors()[1]);
}

#[test]
fn off_grid_click_changes_nothing() {
    let mut engine = engine_on(corner_colors(), ScriptedColors::default());
    let before = engine.state().clone();

    assert_eq!(resolve(engine.config(), WIDTH + 1.0, HEIGHT / 2.0), None);
    assert_eq!(resolve(engine.config(), WIDTH, 0.0), None);
    assert_eq!(click(&mut engine, WIDTH + 1.0, HEIGHT / 2.0), TickOutcome::Idle);
    assert_eq!(engine.state(), &before);
}

#[test]
fn tolerance_boundary_is_inclusive() {
    let mut colors = vec![gray(1.0); 100];
    colors[0] = Rgb::new(0.0, 0.0, 0.0);
    colors[1] = Rgb::new(TOLERANCE * MAX_DISTANCE, 0.0, 0.0);
    assert_eq!(colors[0].normalized_distance(&colors[1]), TOLERANCE);

    let mut engine = engine_on(colors, ScriptedColors::default());
    let outcome = click(&mut engine, 10.0, 10.0);

    assert_eq!(
        outcome,
        TickOutcome::Played { cell: CellIndex::new(0, 0), chain: 2, score: -1 }
    );
    assert!(!engine.board()[CellIndex::new(0, 1)].visible);
}

#[test]
fn clicking_a_hidden_cell_is_free() {
    let mut engine = engine_on(corner_colors(), ScriptedColors::default());

    click(&mut engine, 90.0, 10.0);
    let after_first = engine.state().clone();
    assert_eq!(after_first.score, -3);

    let outcome = click(&mut engine, 90.0, 10.0);

    assert_eq!(outcome, TickOutcome::Ignored { cell: CellIndex::new(1, 0) });
    assert_eq!(engine.state(), &after_first);
}

#[test]
fn restart_carries_no_stale_state() {
    // Second game starts with the same color the first game ended on.
    let mut restarts = vec![gray(1.0); 100];
    restarts[0] = gray(0.5);
    let mut engine = engine_on(vec![gray(0.5); 100], ScriptedColors::new(restarts));

    assert!(click(&mut engine, 0.0, 0.0).game_ended().is_some());
    assert_eq!(engine.pending(), None);
    assert!(engine.board()[CellIndex::new(0, 0)].visible);

    let outcome = click(&mut engine, 0.0, 0.0);

    assert_eq!(
        outcome,
        TickOutcome::Played { cell: CellIndex::new(0, 0), chain: 1, score: -3 }
    );
    assert!(!engine.board()[CellIndex::new(0, 0)].visible);
    assert_eq!(engine.board().visible_count(), 99);
}

#[test]
fn presenter_draws_a_played_board() {
    let mut engine = engine_on(corner_colors(), ScriptedColors::default());
    click(&mut engine, 0.0, 0.0);

    let presenter = Presenter::new(engine.config());
    let mut canvas = RecordingCanvas::new();
    presenter.draw(engine.board(), &mut canvas);

    assert_eq!(canvas.ops().first(), Some(&CanvasOp::Clear(Color::BLACK)));
    assert_eq!(canvas.ops().last(), Some(&CanvasOp::Present));

    let quads = canvas.last_frame_quads();
    assert_eq!(quads.len(), 100);
    assert_eq!(quads[0].1, Color::BLACK);
    assert_eq!(quads[1].1, Color::from(corner_colors()[1]));
}
