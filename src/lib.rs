//! TUI Stacker (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_stacker::{core,input,term,types}` and holds the
//! binary-side configuration and logging setup.

pub mod config;
pub mod logging;

pub use tui_stacker_core as core;
pub use tui_stacker_input as input;
pub use tui_stacker_term as term;
pub use tui_stacker_types as types;

pub use config::Config;
