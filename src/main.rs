//! Terminal stacker runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from the term crate.
//! Frames are paced at ~60 Hz by the input poll timeout; the game loop measures
//! real elapsed time on every frame.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use log::{debug, info};

use tui_stacker::core::{GameLoop, GameState};
use tui_stacker::input::{handle_key_event, should_quit};
use tui_stacker::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use tui_stacker::types::{GameEvent, GameStatus, FRAME_MS};
use tui_stacker::{logging, Config};

/// Keep-alive redraw interval for static screens.
const STATIC_REDRAW_MS: u64 = 500;

fn main() -> Result<()> {
    let config = Config::from_env();
    if let Some(path) = &config.log_path {
        if let Err(err) = logging::init(path) {
            eprintln!("logging disabled: {err:#}");
        }
    }

    let mut term = TerminalRenderer::stdout();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("exiting on error: {err:#}");
    }
    result
}

fn terminal_size() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn run(term: &mut TerminalRenderer, mut config: Config) -> Result<()> {
    let view = GameView::default();
    if config.fit_board {
        let (rows, cols) = view.fit_board(terminal_size());
        config.game.rows = rows;
        config.game.cols = cols;
    }
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        "starting: {}x{} board, drop every {} ms, {} lives, seed {}",
        config.game.rows, config.game.cols, config.game.drop_interval_ms, config.game.lives, seed
    );

    let mut game = GameLoop::new(GameState::new(config.game, seed));
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let mut fb = FrameBuffer::new(0, 0);

    let epoch = Instant::now();
    let now_ms = || epoch.elapsed().as_millis() as u64;
    let frame_duration = Duration::from_millis(FRAME_MS as u64);

    loop {
        let frame_start = Instant::now();
        game.frame(now_ms());
        for event in game.take_events() {
            log_event(event);
        }

        let is_static = game.status() != GameStatus::Running;
        if throttle.should_render(now_ms(), game.state().fingerprint(), is_static) {
            view.render_into(game.state(), terminal_size(), &mut fb);
            term.present(&mut fb)?;
        }

        let timeout = frame_duration.saturating_sub(frame_start.elapsed());
        if !event::poll(timeout)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    info!("quit requested");
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    let applied = game.apply_action(action, now_ms());
                    let outcome = if applied { "applied" } else { "ignored" };
                    debug!("{} -> {outcome}", action.as_str());
                }
            }
            Event::Resize(w, h) => {
                debug!("terminal resized to {w}x{h}");
                term.invalidate();
                throttle.force();
            }
            _ => {}
        }
    }
}

fn log_event(event: GameEvent) {
    match event {
        GameEvent::StatusChanged(status) => info!("status: {}", status.as_str()),
        GameEvent::ScoreChanged(score) => info!("score: {score}"),
        GameEvent::LivesChanged(lives) => info!("lives: {lives}"),
        GameEvent::TimerTick(secs) => debug!("elapsed: {secs}s"),
        GameEvent::PieceLocked { lines_cleared } if lines_cleared > 0 => {
            info!("cleared {lines_cleared} line(s)")
        }
        GameEvent::PieceLocked { .. } => debug!("piece locked"),
        GameEvent::GameOver { final_score } => info!("game over, final score {final_score}"),
    }
}
