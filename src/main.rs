//! Terminal blockfall runner.
//!
//! Synchronous driver: render, wait for input until the gravity deadline,
//! dispatch one stimulus at a time, tick. The core never sees a timer; it
//! only receives `tick()` calls, which keeps the game logic testable
//! without a terminal or a clock.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::GameState;
use blockfall::input::{map_key_event, should_quit};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameCommand, GRAVITY_INTERVAL_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Ok(Some(score)) = result {
        println!("final score: {score}");
    }
    result.map(|_| ())
}

fn run(term: &mut TerminalRenderer) -> Result<Option<u32>> {
    let mut game = GameState::new(clock_seed());
    game.start();

    let view = GameView::default();
    let gravity = Duration::from_millis(GRAVITY_INTERVAL_MS);

    // The deadline is the gravity timer: dropped once the game ends, armed
    // fresh on restart, so no tick crosses a termination or reset boundary.
    let mut deadline = Some(Instant::now() + gravity);
    let mut final_score = None;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, Viewport::new(w, h));
        term.draw(&fb)?;

        let timeout = match deadline {
            Some(t) => t.saturating_duration_since(Instant::now()),
            // Game over: idle until the player restarts or quits.
            None => Duration::from_millis(250),
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    if should_quit(key) {
                        return Ok(final_score);
                    }
                    if let Some(command) = map_key_event(key) {
                        game.apply(command);
                        if command == GameCommand::Restart {
                            deadline = Some(Instant::now() + gravity);
                        }
                    }
                }
            }
        }

        if let Some(t) = deadline {
            if Instant::now() >= t {
                game.tick();
                deadline = Some(Instant::now() + gravity);
            }
        }

        if let Some(score) = game.take_game_over() {
            final_score = Some(score);
            deadline = None;
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}
