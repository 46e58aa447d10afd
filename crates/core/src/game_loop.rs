//! Game loop - frame-driven scheduling of drops and the session clock
//!
//! The host calls [`GameLoop::frame`] once per displayed frame with a monotonic
//! timestamp. Frames are not assumed to be evenly spaced: the elapsed time since the
//! previous frame is measured on every call.
//!
//! - **Drops**: a drop accumulator collects elapsed milliseconds. When it reaches the
//!   drop interval, exactly one downward move is applied and the accumulator is reset
//!   to zero. Overshoot is discarded, so the cadence drifts with frame timing.
//! - **Clock**: a separate accumulator emits one `TimerTick` per full second while
//!   running. Its remainder is kept.
//! - **Scheduling**: the loop is only scheduled while the game is `Running`. Pausing,
//!   game over and restart unschedule it; `start` and resume reschedule it and reset
//!   the frame baseline, so paused time is never credited.
//!
//! The loop owns the [`GameState`] and exposes the input operations, which are applied
//! immediately between frames.

use crate::game_state::GameState;
use crate::types::{GameAction, GameEvent, GameStatus, MoveOutcome, TIMER_TICK_MS};

/// What a call to [`GameLoop::frame`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// The loop is not scheduled; nothing was simulated.
    Stopped,
    /// Time advanced; `drop` is the automatic drop applied this frame, if any.
    Advanced { drop: Option<MoveOutcome> },
}

/// Owns the simulation and drives it from frame timestamps
#[derive(Debug)]
pub struct GameLoop {
    state: GameState,
    drop_interval_ms: u64,
    drop_counter_ms: u64,
    clock_ms: u64,
    last_frame_ms: u64,
    scheduled: bool,
}

impl GameLoop {
    pub fn new(state: GameState) -> Self {
        let drop_interval_ms = state.config().drop_interval_ms as u64;
        Self {
            state,
            drop_interval_ms,
            drop_counter_ms: 0,
            clock_ms: 0,
            last_frame_ms: 0,
            scheduled: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Whether the next frame will simulate anything.
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    pub fn drop_interval_ms(&self) -> u64 {
        self.drop_interval_ms
    }

    /// Milliseconds collected toward the next automatic drop
    pub fn drop_counter_ms(&self) -> u64 {
        self.drop_counter_ms
    }

    /// Take and clear the pending events.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        self.state.take_events()
    }

    fn schedule(&mut self, now_ms: u64) {
        self.last_frame_ms = now_ms;
        self.drop_counter_ms = 0;
        self.scheduled = self.state.status() == GameStatus::Running;
    }

    /// Start a game from `NotRunning`.
    pub fn start(&mut self, now_ms: u64) -> bool {
        if !self.state.start() {
            return false;
        }
        self.clock_ms = 0;
        self.schedule(now_ms);
        true
    }

    /// Pause a running game, or resume a paused one.
    ///
    /// Resuming resets the frame baseline to `now_ms` and discards the pending drop
    /// time, so no drop is applied on the first frame after a resume.
    pub fn toggle_pause(&mut self, now_ms: u64) -> bool {
        if !self.state.toggle_pause() {
            return false;
        }
        match self.state.status() {
            GameStatus::Running => self.schedule(now_ms),
            _ => self.scheduled = false,
        }
        true
    }

    /// Return to the title screen with a fresh session; the loop stops.
    pub fn restart(&mut self) {
        self.state.restart();
        self.scheduled = false;
        self.drop_counter_ms = 0;
        self.clock_ms = 0;
    }

    /// Advance the simulation to `now_ms`.
    pub fn frame(&mut self, now_ms: u64) -> Frame {
        if !self.scheduled || self.state.status() != GameStatus::Running {
            self.scheduled = false;
            return Frame::Stopped;
        }

        let delta = now_ms.saturating_sub(self.last_frame_ms);
        self.last_frame_ms = now_ms;

        self.clock_ms += delta;
        while self.clock_ms >= TIMER_TICK_MS as u64 {
            self.clock_ms -= TIMER_TICK_MS as u64;
            self.state.tick_second();
        }

        self.drop_counter_ms += delta;
        let mut drop = None;
        if self.drop_counter_ms >= self.drop_interval_ms {
            drop = Some(self.state.soft_drop());
            self.drop_counter_ms = 0;
        }

        if self.state.status() != GameStatus::Running {
            self.scheduled = false;
        }

        Frame::Advanced { drop }
    }

    pub fn move_left(&mut self) -> MoveOutcome {
        self.state.move_left()
    }

    pub fn move_right(&mut self) -> MoveOutcome {
        self.state.move_right()
    }

    /// Manual one-row drop; a committed drop restarts the drop interval.
    pub fn soft_drop(&mut self) -> MoveOutcome {
        let outcome = self.state.soft_drop();
        if outcome.committed() {
            self.drop_counter_ms = 0;
        }
        if self.state.status() != GameStatus::Running {
            self.scheduled = false;
        }
        outcome
    }

    pub fn rotate(&mut self) -> bool {
        self.state.rotate()
    }

    /// Apply an input intent. Returns true if it changed anything.
    pub fn apply_action(&mut self, action: GameAction, now_ms: u64) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left().committed(),
            GameAction::MoveRight => self.move_right().committed(),
            GameAction::SoftDrop => self.soft_drop().committed(),
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => self.toggle_pause(now_ms),
            GameAction::Start => self.start(now_ms),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }
}
