//! Terminal rendering for the stacker.
//!
//! A small, game-oriented rendering layer: the game is drawn into a plain
//! framebuffer which is then diffed and flushed to the terminal with crossterm.
//! No widget or layout library is involved, which keeps precise control over the
//! cell aspect ratio (2 columns per board cell).

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_stacker_core as core;
pub use tui_stacker_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{palette, GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
