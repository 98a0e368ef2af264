//! Terminal snake runner (default binary).
//!
//! The host owns the clock: it renders, polls for input until the next
//! frame, latches the last pressed direction, and feeds measured elapsed
//! time into the simulation.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::{GameConfig, GameSnapshot, GameState};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(GameConfig::default())?;
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(TICK_MS);
    let mut last_update = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until the next frame.
        let timeout = frame
            .checked_sub(last_update.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Edge-triggered: direction latches on press, auto-repeat
                // and releases are ignored.
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(direction) = handle_key_event(key) {
                        game.set_direction(direction);
                    }
                }
            }
        }

        // Tick with measured real time.
        if last_update.elapsed() >= frame {
            let dt = last_update.elapsed();
            last_update = Instant::now();
            game.tick(dt);
        }
    }
}
