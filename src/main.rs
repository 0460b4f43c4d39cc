//! Terminal block-fall runner.
//!
//! Sets up file logging, reads settings, then runs a fixed-rate loop:
//! poll input until the next frame, advance the game with a monotonic
//! millisecond clock, render a snapshot.

use std::fs::OpenOptions;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info, warn};

use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{interpret, InputEvent};
use blockfall::settings::Settings;
use blockfall::term::{BoardView, Canvas, TerminalSession, Viewport};
use blockfall::types::{Difficulty, TICK_MS};

fn main() -> Result<()> {
    // Logging comes first so warnings about bad settings reach the log file.
    init_logging(&Settings::log_path_from_env())?;
    let settings = Settings::from_env();
    info!(
        "starting: seed={} difficulty={}",
        settings.seed,
        settings.difficulty.as_str()
    );

    let mut term = TerminalSession::new();
    term.enter().context("entering raw terminal mode")?;

    let result = run(&mut term, &settings);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        warn!("exiting with error: {err:#}");
    }
    result
}

fn init_logging(log_path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_module_path(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalSession, settings: &Settings) -> Result<()> {
    let mut game = GameState::new(settings.seed);
    game.set_difficulty(settings.difficulty);

    let view = BoardView::default();
    let mut canvas = Canvas::new(0, 0);
    let mut snapshot = GameSnapshot::default();

    let clock = Instant::now();
    let frame = Duration::from_millis(TICK_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        // Input with timeout until next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    match interpret(key, game.game_over()) {
                        Some(InputEvent::Quit) => {
                            info!("quit at score {}", game.score());
                            return Ok(());
                        }
                        Some(InputEvent::Action(action)) => {
                            game.apply_action(action);
                        }
                        Some(InputEvent::ChooseDifficulty(difficulty)) => {
                            choose_difficulty(&mut game, settings, difficulty);
                        }
                        None => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_frame.elapsed() < frame {
            continue;
        }
        last_frame = Instant::now();

        game.tick(clock.elapsed().as_millis() as u64);
        if let Some(lock) = game.take_last_event() {
            if lock.lines_cleared() > 0 {
                debug!(
                    "cleared rows {:?} (+{}), score {}",
                    lock.cleared_rows.as_slice(),
                    lock.score_delta,
                    game.score()
                );
            }
        }

        let (w, h) = term.size().unwrap_or((80, 24));
        game.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, Viewport::new(w, h), &mut canvas);
        term.present(&mut canvas)?;
    }
}

/// Difficulty buttons only work while the game is paused or over.
fn choose_difficulty(game: &mut GameState, settings: &Settings, difficulty: Difficulty) {
    if game.is_running() || game.difficulty() == difficulty {
        return;
    }
    game.set_difficulty(difficulty);
    if let Err(err) = settings.persist_difficulty(difficulty) {
        warn!("could not save preferences: {err:#}");
    }
}
