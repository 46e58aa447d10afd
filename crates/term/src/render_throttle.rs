//! Frame pacing for the terminal.
//!
//! While the game runs every frame is drawn. On static screens (title, pause, game
//! over) a frame is drawn only when the state fingerprint changes, plus a slow
//! keep-alive redraw.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last: None,
        }
    }

    /// Drop the history so the next call renders.
    pub fn force(&mut self) {
        self.last = None;
    }

    /// Decide whether to render at `now_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let render = match self.last {
            None => true,
            Some(_) if !is_static => true,
            Some((_, seen)) if seen != fingerprint => true,
            Some((at, _)) => now_ms.saturating_sub(at) >= self.min_static_interval_ms,
        };
        if render {
            self.last = Some((now_ms, fingerprint));
        }
        render
    }
}
