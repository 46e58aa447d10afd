//! Runtime configuration read from `STACKER_*` environment variables.
//!
//! Unparsable values fall back to their defaults with a warning; board edges,
//! drop interval and lives are clamped by [`GameConfig::normalized`].

use std::env;
use std::str::FromStr;

use log::warn;

use crate::core::GameConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub game: GameConfig,
    /// Size the board from the terminal instead of `rows`/`cols`.
    pub fit_board: bool,
    /// Fixed RNG seed; a random one is drawn when unset.
    pub seed: Option<u32>,
    /// Log file; logging stays off when unset.
    pub log_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = GameConfig::default();
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let game = GameConfig {
            rows: parse_or(get("STACKER_ROWS"), "STACKER_ROWS", defaults.rows),
            cols: parse_or(get("STACKER_COLS"), "STACKER_COLS", defaults.cols),
            drop_interval_ms: parse_or(
                get("STACKER_DROP_MS"),
                "STACKER_DROP_MS",
                defaults.drop_interval_ms,
            ),
            lives: parse_or(get("STACKER_LIVES"), "STACKER_LIVES", defaults.lives),
            line_score: defaults.line_score,
        };

        let fit_board = get("STACKER_FIT_BOARD")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let seed = get("STACKER_SEED").and_then(|s| match s.parse() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!("ignoring invalid STACKER_SEED={s:?}");
                None
            }
        });

        Self {
            game: game.normalized(),
            fit_board,
            seed,
            log_path: get("STACKER_LOG_PATH"),
        }
    }
}

fn parse_or<T: FromStr + Copy>(value: Option<String>, key: &str, default: T) -> T {
    match value {
        None => default,
        Some(s) => s.parse().unwrap_or_else(|_| {
            warn!("ignoring invalid {key}={s:?}");
            default
        }),
    }
}
