//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Every press is a
//! discrete intent; there is no auto-repeat handling beyond what the terminal sends.

pub mod map;

pub use tui_stacker_types as types;

pub use map::{handle_key_event, should_quit};
