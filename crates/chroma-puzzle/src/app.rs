use std::io::{self, Stdout, Write};

use anyhow::Context as _;

use chroma_engine::coords::Viewport;
use chroma_engine::core::{App, AppControl, FrameCtx};
use chroma_engine::device::Gpu;
use chroma_engine::input::{InputFrame, Key};
use chroma_engine::render::{PresentStatus, QuadRenderer};

use crate::color::ColorSource;
use crate::config::PuzzleConfig;
use crate::engine::{PuzzleEngine, TickOutcome};
use crate::presenter::Presenter;
use crate::resolver::resolve;

/// Writes the end-of-game announcement for `outcome`, if it ended a game.
pub fn announce(outcome: &TickOutcome, out: &mut impl Write) -> io::Result<()> {
    if let Some(score) = outcome.game_ended() {
        writeln!(out, "Parabéns! você obteve {score} pontos")?;
        writeln!(out, "Recomeçando")?;
        out.flush()?;
    }
    Ok(())
}

/// The puzzle as a windowed application.
///
/// Each frame: Escape closes, primary clicks become the pending selection
/// (the last one wins), the engine ticks once, and the board is redrawn.
pub struct PuzzleApp<S, W = Stdout> {
    engine: PuzzleEngine<S>,
    presenter: Presenter,
    quads: Option<QuadRenderer>,
    out: W,
}

impl<S: ColorSource> PuzzleApp<S, Stdout> {
    pub fn new(config: PuzzleConfig, colors: S) -> Self {
        Self::with_output(config, colors, io::stdout())
    }
}

impl<S: ColorSource, W: Write> PuzzleApp<S, W> {
    /// Like `new`, with announcements going to `out`.
    pub fn with_output(config: PuzzleConfig, colors: S, out: W) -> Self {
        let presenter = Presenter::new(&config);
        Self {
            engine: PuzzleEngine::new(config, colors),
            presenter,
            quads: None,
            out,
        }
    }

    pub fn engine(&self) -> &PuzzleEngine<S> {
        &self.engine
    }

    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Applies one frame of input and advances the game.
    ///
    /// Returns `AppControl::Exit` when Escape was pressed; the game is not
    /// advanced in that case.
    pub fn step(&mut self, input: &InputFrame) -> (AppControl, TickOutcome) {
        if input.key_pressed(Key::Escape) {
            log::info!("escape pressed; closing");
            return (AppControl::Exit, TickOutcome::Idle);
        }

        for click in input.primary_clicks() {
            match resolve(self.engine.config(), click.x, click.y) {
                Some(cell) => {
                    if let Err(err) = self.engine.submit(cell) {
                        log::warn!("click at ({}, {}) rejected: {err}", click.x, click.y);
                    }
                }
                None => log::trace!("click at ({}, {}) outside the grid", click.x, click.y),
            }
        }

        let outcome = self.engine.tick();
        if let Err(err) = announce(&outcome, &mut self.out) {
            log::warn!("failed to write announcement: {err}");
        }
        (AppControl::Continue, outcome)
    }
}

impl<S, W> App for PuzzleApp<S, W>
where
    S: ColorSource + 'static,
    W: Write + 'static,
{
    fn init(&mut self, gpu: &Gpu<'_>) -> anyhow::Result<()> {
        let quads = QuadRenderer::new(gpu.device(), gpu.surface_format())
            .context("failed to build the quad pipeline")?;
        self.quads = Some(quads);
        log::info!(
            "board {}x{} ready",
            self.engine.config().columns,
            self.engine.config().rows
        );
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (control, _) = self.step(ctx.input_frame);
        if control == AppControl::Exit {
            return control;
        }

        let Some(quads) = self.quads.as_mut() else {
            return AppControl::Continue;
        };

        let config = self.engine.config();
        let space = Viewport::new(config.width, config.height);
        let mut canvas = ctx.canvas(quads, space);
        self.presenter.draw(self.engine.board(), &mut canvas);

        match canvas.status() {
            PresentStatus::Fatal => {
                log::error!("surface lost for good; closing");
                AppControl::Exit
            }
            _ => AppControl::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use chroma_engine::input::{
        InputEvent, InputState, KeyState, Modifiers, MouseButton, MouseButtonState,
        PointerButtonEvent,
    };

    use super::*;
    use crate::board::CellIndex;
    use crate::color::{Rgb, ScriptedColors};

    fn click(state: &mut InputState, frame: &mut InputFrame, x: f32, y: f32) {
        for s in [MouseButtonState::Pressed, MouseButtonState::Released] {
            state.apply_event(
                frame,
                InputEvent::PointerButton(PointerButtonEvent {
                    button: MouseButton::Left,
                    state: s,
                    x,
                    y,
                    modifiers: Modifiers::default(),
                }),
            );
        }
    }

    fn key(state: &mut InputState, frame: &mut InputFrame, key: Key) {
        state.apply_event(
            frame,
            InputEvent::Key {
                key,
                state: KeyState::Pressed,
                modifiers: Modifiers::default(),
                repeat: false,
            },
        );
    }

    fn uniform_app() -> PuzzleApp<ScriptedColors, Vec<u8>> {
        let config = PuzzleConfig {
            columns: 2,
            rows: 2,
            ..Default::default()
        };
        PuzzleApp::with_output(config, ScriptedColors::uniform(Rgb::new(0.3, 0.6, 0.9)), Vec::new())
    }

    #[test]
    fn announce_writes_both_lines_on_game_end() {
        let mut out = Vec::new();
        let outcome = TickOutcome::GameEnded {
            cell: CellIndex::new(0, 0),
            chain: 100,
            final_score: 195,
        };
        announce(&outcome, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Parabéns! você obteve 195 pontos\nRecomeçando\n"
        );
    }

    #[test]
    fn announce_is_silent_otherwise() {
        let mut out = Vec::new();
        announce(&TickOutcome::Idle, &mut out).unwrap();
        announce(
            &TickOutcome::Played { cell: CellIndex::new(0, 0), chain: 1, score: -3 },
            &mut out,
        )
        .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn escape_exits_without_ticking() {
        let mut app = uniform_app();
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        click(&mut state, &mut frame, 10.0, 10.0);
        key(&mut state, &mut frame, Key::Escape);

        let (control, outcome) = app.step(&frame);

        assert_eq!(control, AppControl::Exit);
        assert_eq!(outcome, TickOutcome::Idle);
        assert_eq!(app.engine().board().visible_count(), 4);
    }

    #[test]
    fn last_click_of_a_frame_wins() {
        let config = PuzzleConfig {
            columns: 2,
            rows: 1,
            ..Default::default()
        };
        let colors = ScriptedColors::new([Rgb::new(0.0, 0.0, 0.0), Rgb::new(1.0, 1.0, 1.0)]);
        let mut app = PuzzleApp::with_output(config, colors, Vec::new());
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        click(&mut state, &mut frame, 100.0, 100.0);
        click(&mut state, &mut frame, 700.0, 100.0);

        let (_, outcome) = app.step(&frame);

        assert_eq!(
            outcome,
            TickOutcome::Played { cell: CellIndex::new(1, 0), chain: 1, score: -3 }
        );
    }

    #[test]
    fn clearing_the_board_prints_and_restarts() {
        let mut app = uniform_app();
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        click(&mut state, &mut frame, 500.0, 500.0);

        let (control, outcome) = app.step(&frame);

        assert_eq!(control, AppControl::Continue);
        assert_eq!(outcome.game_ended(), Some(-5 + 4 * 2));
        assert_eq!(app.engine().score(), 0);
        assert_eq!(
            String::from_utf8_lossy(app.output()),
            "Parabéns! você obteve 3 pontos\nRecomeçando\n"
        );
    }

    #[test]
    fn off_grid_and_secondary_clicks_do_nothing() {
        let mut app = uniform_app();
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        click(&mut state, &mut frame, 800.0, 10.0);
        click(&mut state, &mut frame, -1.0, 10.0);
        state.apply_event(
            &mut frame,
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Right,
                state: MouseButtonState::Pressed,
                x: 10.0,
                y: 10.0,
                modifiers: Modifiers::default(),
            }),
        );

        let (_, outcome) = app.step(&frame);

        assert_eq!(outcome, TickOutcome::Idle);
        assert_eq!(app.engine().score(), 0);
        assert!(app.output().is_empty());
    }
}
