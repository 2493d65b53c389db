//! Terminal blockfall runner (default binary).
//!
//! Owns the gravity timer and the keyboard loop; the engine itself is
//! time-free and is driven entirely through `step()` and intents.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::BoardEngine;
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::DROP_INTERVAL_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
        ^ std::process::id();
    let mut engine = BoardEngine::new(seed);

    let view = GameView::default();
    let interval = Duration::from_millis(DROP_INTERVAL_MS);

    // Gravity deadline. `None` means the timer is stopped, which is
    // the case whenever the game is paused or over; it is re-armed
    // when play resumes.
    let mut next_drop: Option<Instant> = Some(Instant::now());
    let mut last_size = crossterm::terminal::size().unwrap_or((80, 24));

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        if (w, h) != last_size {
            last_size = (w, h);
            term.invalidate();
        }
        let fb = view.render(&engine.snapshot(), Viewport::new(w, h));
        term.draw(&fb)?;

        // Block on input until the gravity deadline, or indefinitely
        // in bursts while the timer is stopped.
        let now = Instant::now();
        let timeout = match next_drop {
            Some(deadline) => deadline.saturating_duration_since(now),
            None => Duration::from_millis(250),
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(intent) = handle_key_event(key) {
                        engine.apply_intent(intent);
                    }
                }
            }
        }

        let now = Instant::now();
        if engine.status().is_playing() {
            match next_drop {
                Some(deadline) if now >= deadline => {
                    engine.step();
                    next_drop = Some(now + interval);
                }
                Some(_) => {}
                // Timer was stopped; re-arm it. A fresh or restarted
                // game spawns its first piece immediately instead of
                // waiting out a full interval.
                None => {
                    if engine.active().is_none() {
                        engine.step();
                    }
                    next_drop = Some(now + interval);
                }
            }
        } else {
            next_drop = None;
        }
    }
}
