//! File logging.
//!
//! The terminal is owned by the renderer, so log records go to a file. Nothing is
//! installed without a path; `RUST_LOG` filters as usual (default `info`).

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

/// Install the global logger writing to `path`.
pub fn init(path: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("installing logger")?;
    Ok(())
}
