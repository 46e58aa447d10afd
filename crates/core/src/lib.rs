//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule, scripted piece sources for scenarios
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with occupancy queries and shift-down row clears
//! - [`pieces`]: tetromino catalog, colors and on-demand matrix rotation
//! - [`rng`]: uniform piece selection from a seeded LCG
//! - [`collision`]: the collision predicate shared by moves, rotation and spawning
//! - [`game_state`]: active piece, locking, scoring, lives and the status machine
//! - [`game_loop`]: frame-driven drop and clock scheduling plus input operations
//!
//! # Game Rules
//!
//! - **Random pieces**: each spawn picks one of the 7 kinds uniformly
//! - **Naive rotation**: clockwise matrix rotation about the top-left, no wall kicks
//! - **Instant lock**: a blocked downward move locks the piece immediately
//! - **Flat scoring**: 100 points per cleared row
//! - **Lives**: a blocked spawn costs a life and clears the board; the last life ends
//!   the game
//!
//! # Example
//!
//! ```
//! use tui_stacker_core::{GameConfig, GameLoop, GameState};
//! use tui_stacker_types::{GameAction, GameStatus};
//!
//! let mut game = GameLoop::new(GameState::new(GameConfig::default(), 12345));
//! game.apply_action(GameAction::Start, 0);
//!
//! game.apply_action(GameAction::MoveRight, 5);
//! game.apply_action(GameAction::Rotate, 10);
//!
//! // Feed frame timestamps; a drop happens every second.
//! game.frame(16);
//! game.frame(1016);
//!
//! assert_eq!(game.status(), GameStatus::Running);
//! assert_eq!(game.state().score(), 0);
//! ```

pub mod board;
pub mod collision;
pub mod config;
pub mod game_loop;
pub mod game_state;
pub mod pieces;
pub mod rng;

pub use tui_stacker_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::collides;
pub use config::GameConfig;
pub use game_loop::{Frame, GameLoop};
pub use game_state::{ActivePiece, GameState};
pub use pieces::{base_shape, color, Shape};
pub use rng::{FixedSequence, PieceSource, SimpleRng, UniformRandomizer};
