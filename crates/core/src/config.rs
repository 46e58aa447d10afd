//! Game configuration - the knobs that differ between front ends

use crate::types::{
    DEFAULT_COLS, DEFAULT_LIVES, DEFAULT_ROWS, DROP_INTERVAL_MS, LINE_SCORE, MAX_BOARD_EDGE,
    MIN_BOARD_EDGE,
};

/// Parameters of one simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Automatic drop interval in milliseconds
    pub drop_interval_ms: u32,
    /// Lives at the start of a game; losing the last one ends it
    pub lives: u32,
    /// Points added per cleared row
    pub line_score: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            drop_interval_ms: DROP_INTERVAL_MS,
            lives: DEFAULT_LIVES,
            line_score: LINE_SCORE,
        }
    }
}

impl GameConfig {
    /// Clamp every field into its playable range.
    ///
    /// Board edges are kept within `MIN_BOARD_EDGE..=MAX_BOARD_EDGE`, the drop interval
    /// and lives are at least 1.
    pub fn normalized(self) -> Self {
        Self {
            rows: self.rows.clamp(MIN_BOARD_EDGE, MAX_BOARD_EDGE),
            cols: self.cols.clamp(MIN_BOARD_EDGE, MAX_BOARD_EDGE),
            drop_interval_ms: self.drop_interval_ms.max(1),
            lives: self.lives.max(1),
            line_score: self.line_score,
        }
    }
}
