//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions (configurable at runtime):
//!
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Spawn position**: row 0, horizontally centered for the piece width
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Display frame pacing (~60 FPS) |
//! | `DROP_INTERVAL_MS` | 1000 | Automatic drop interval |
//! | `TIMER_TICK_MS` | 1000 | Elapsed-time clock resolution |
//!
//! # Examples
//!
//! ```
//! use tui_stacker_types::{GameAction, GameStatus, PieceKind, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! // Parse from string (case-insensitive)
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! // Parse game action
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! // Only a running game accepts movement
//! assert!(GameStatus::Running.accepts_moves());
//! assert!(!GameStatus::Paused.accepts_moves());
//!
//! // Board dimensions
//! assert_eq!(DEFAULT_ROWS, 20);
//! assert_eq!(DEFAULT_COLS, 10);
//! ```

/// Default board height in rows
pub const DEFAULT_ROWS: usize = 20;

/// Default board width in columns
pub const DEFAULT_COLS: usize = 10;

/// Smallest board edge accepted by configuration
pub const MIN_BOARD_EDGE: usize = 4;

/// Largest board edge accepted by configuration
pub const MAX_BOARD_EDGE: usize = 64;

/// Display frame pacing in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Automatic drop interval (one row per second)
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Elapsed-time clock resolution
pub const TIMER_TICK_MS: u32 = 1000;

/// Points per cleared row (flat, no multi-line bonus)
pub const LINE_SCORE: u32 = 100;

/// Lives at the start of a game
pub const DEFAULT_LIVES: u32 = 1;

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green, S-shaped
/// - **T**: Purple, T-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_stacker_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Named piece colors
///
/// Front ends resolve these to their own palette (RGB, ANSI, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

/// Lifecycle of a game session
///
/// ```text
/// NotRunning --start--> Running --pause--> Paused --pause--> Running
/// Running --spawn blocked, no lives left--> GameOver
/// any --restart--> NotRunning
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    NotRunning,
    Running,
    Paused,
    GameOver,
}

impl GameStatus {
    /// Movement, rotation and drops are only honoured while running.
    pub fn accepts_moves(&self) -> bool {
        matches!(self, GameStatus::Running)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::NotRunning => "notRunning",
            GameStatus::Running => "running",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "gameOver",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// These are the intents delivered by an input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (locks when blocked)
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Toggle pause state
    Pause,
    /// Start a game from the title screen
    Start,
    /// Reset the session back to the title screen
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_stacker_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "pause" => Some(GameAction::Pause),
            "start" => Some(GameAction::Start),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Start => "start",
            GameAction::Restart => "restart",
        }
    }
}

/// Result of a translation request on the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The offset was committed.
    Moved,
    /// A downward move was blocked: the piece was merged into the board,
    /// full rows were cleared and the next piece was spawned.
    Locked { lines_cleared: u32 },
    /// Blocked sideways/upward move, or no piece to move. Nothing changed.
    Rejected,
}

impl MoveOutcome {
    /// True when the game state changed.
    pub fn committed(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected)
    }
}

/// Core-side notification for presentation collaborators.
///
/// Events are queued by the simulation and drained by the host once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    StatusChanged(GameStatus),
    ScoreChanged(u32),
    LivesChanged(u32),
    /// Whole seconds spent running (unpaused) in this session.
    TimerTick(u32),
    PieceLocked { lines_cleared: u32 },
    /// Emitted once, when the last life is lost.
    GameOver { final_score: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_defaults() {
        assert_eq!(DEFAULT_ROWS, 20);
        assert_eq!(DEFAULT_COLS, 10);
        assert_eq!(DROP_INTERVAL_MS, 1000);
        assert_eq!(LINE_SCORE, 100);
        assert_eq!(DEFAULT_LIVES, 1);
    }

    #[test]
    fn piece_kind_roundtrips_through_str() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn game_action_roundtrips_through_str() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::Rotate,
            GameAction::Pause,
            GameAction::Start,
            GameAction::Restart,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn move_outcome_flags() {
        assert!(MoveOutcome::Moved.committed());
        assert!(MoveOutcome::Locked { lines_cleared: 0 }.committed());
        assert!(!MoveOutcome::Rejected.committed());
    }
}
