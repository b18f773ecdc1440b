//! Terminal runner (default binary).
//!
//! Drives the engine with a cooperative frame loop: render, poll input for
//! the remainder of the frame budget, apply mapped actions synchronously, and
//! fire the gravity tick with a monotonic millisecond timestamp. One thread
//! owns the game state; actions and ticks are serialized by construction.

use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::Game;
use blockfall::input::{action_for_key, should_quit};
use blockfall::term::{GameView, Screen};
use blockfall::types::FRAME_MS;

fn main() -> Result<()> {
    let seed = parse_seed(&std::env::args().skip(1).collect::<Vec<_>>())?;

    let mut screen = Screen::new();
    screen.enter()?;

    let result = run(&mut screen, seed);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

/// Parse `--seed <u32>` from the command line; defaults to 1.
fn parse_seed(args: &[String]) -> Result<u32> {
    let mut seed = 1u32;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(seed)
}

fn run(screen: &mut Screen, seed: u32) -> Result<()> {
    let mut game = Game::new(seed);
    let view = GameView::default();

    let started = Instant::now();
    let frame = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
        view.draw(screen, &game.snapshot(), cols, rows)?;
        screen.flush()?;

        // Input with timeout until the next frame.
        let timeout = frame
            .checked_sub(last_frame.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = action_for_key(key) {
                        game.apply(action);
                    }
                }
            }
        }

        // Tick.
        if last_frame.elapsed() >= frame {
            last_frame = Instant::now();
            game.tick(started.elapsed().as_millis() as u64);
        }
    }
}
