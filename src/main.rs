//! Terminal Tetris runner (default binary).
//!
//! Owns the real-time clock: renders, polls crossterm for input until the next
//! frame is due, credits the engine with one frame of time units, then drains
//! the engine's events (log, persist, exit).

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use classic_tetris::config::AppConfig;
use classic_tetris::core::{GameEngine, GameSnapshot};
use classic_tetris::event_log::{EventLog, LogEvent};
use classic_tetris::input::{map_key, should_quit};
use classic_tetris::persist;
use classic_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use classic_tetris::types::EngineEvent;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let high_scores = persist::load_high_scores(&config.high_scores_path)?;
    let mut log = match &config.log_path {
        // The log is optional; an unwritable path just disables it.
        Some(path) => EventLog::open(path).unwrap_or_else(|_| EventLog::disabled()),
        None => EventLog::disabled(),
    };
    let mut engine = GameEngine::with_high_scores(config.seed, high_scores);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine, &config, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();
    log.flush();

    let saved = persist::save_high_scores(&config.high_scores_path, engine.high_scores());
    result.and(saved)
}

fn run(
    term: &mut TerminalRenderer,
    engine: &mut GameEngine,
    config: &AppConfig,
    log: &mut EventLog,
) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = config.tick_duration();
    let mut last_tick = Instant::now();
    let mut frame: u64 = 0;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        engine.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = map_key(key, engine.screen()) {
                        let changed = engine.apply_command(command);
                        log.record(frame, LogEvent::command(command, changed));
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            frame += 1;
            engine.on_tick(config.tick_units);
        }

        for event in engine.take_events() {
            log.record(frame, event);
            match event {
                EngineEvent::HighScoresChanged => {
                    persist::save_during_play(
                        &config.high_scores_path,
                        engine.high_scores(),
                        log,
                        frame,
                    );
                }
                EngineEvent::ExitRequested => return Ok(()),
                _ => {}
            }
        }
    }
}
