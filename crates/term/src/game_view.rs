//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{color, GameState};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, GameStatus, PieceKind, MAX_BOARD_EDGE, MIN_BOARD_EDGE};

/// Columns reserved right of the board for the side panel.
const PANEL_W: u16 = 16;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::BLACK;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Screen-space placement of the board frame.
#[derive(Debug, Clone, Copy)]
struct Layout {
    x: u16,
    y: u16,
    frame_w: u16,
    frame_h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Largest board (rows, cols) that fits `viewport` next to the side panel.
    pub fn fit_board(&self, viewport: Viewport) -> (usize, usize) {
        let rows = viewport.height.saturating_sub(2) / self.cell_h;
        let cols = viewport.width.saturating_sub(2 + PANEL_W) / self.cell_w;
        (
            (rows as usize).clamp(MIN_BOARD_EDGE, MAX_BOARD_EDGE),
            (cols as usize).clamp(MIN_BOARD_EDGE, MAX_BOARD_EDGE),
        )
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the viewport.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board = state.board();
        let board_px_w = (board.cols() as u16).saturating_mul(self.cell_w);
        let board_px_h = (board.rows() as u16).saturating_mul(self.cell_h);
        let frame_w = board_px_w.saturating_add(2);
        let frame_h = board_px_h.saturating_add(2);

        let layout = Layout {
            x: viewport.width.saturating_sub(frame_w.saturating_add(PANEL_W)) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        };

        let bg = CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        // Background for play area.
        fb.fill_rect(layout.x + 1, layout.y + 1, board_px_w, board_px_h, ' ', bg);

        self.draw_border(fb, layout, border);

        // Settled cells.
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                match board.get(row as i32, col as i32).flatten() {
                    Some(kind) => self.draw_piece_cell(fb, layout, row as u16, col as u16, kind),
                    None => self.draw_empty_cell(fb, layout, row as u16, col as u16),
                }
            }
        }

        // Active piece; minos above the top edge are not drawn.
        if let Some(active) = state.active() {
            for (row, col) in active.cells() {
                let on_board = row >= 0
                    && col >= 0
                    && (row as usize) < board.rows()
                    && (col as usize) < board.cols();
                if on_board {
                    self.draw_piece_cell(fb, layout, row as u16, col as u16, active.kind);
                }
            }
        }

        self.draw_side_panel(fb, state, viewport, layout);

        match state.status() {
            GameStatus::NotRunning => {
                self.draw_overlay(fb, layout, &["PRESS SPACE", "TO START"], None);
            }
            GameStatus::Paused => {
                self.draw_overlay(fb, layout, &["PAUSED", "P TO RESUME"], None);
            }
            GameStatus::GameOver => {
                self.draw_overlay(
                    fb,
                    layout,
                    &["GAME OVER", "R TO RESTART"],
                    Some(state.score()),
                );
            }
            GameStatus::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: Layout, style: CellStyle) {
        let Layout {
            x,
            y,
            frame_w: w,
            frame_h: h,
        } = layout;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, layout: Layout, row: u16, col: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        self.fill_cell_rect(fb, layout, row, col, '·', style);
    }

    fn draw_piece_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        row: u16,
        col: u16,
        kind: PieceKind,
    ) {
        let style = CellStyle::new(palette(color(kind)), BOARD_BG).bold();
        self.fill_cell_rect(fb, layout, row, col, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        row: u16,
        col: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = layout.x + 1 + col * self.cell_w;
        let py = layout.y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        layout: Layout,
    ) {
        let panel_x = layout.x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let help = value.dim();

        let mut y = layout.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, state.score(), value);
        y += 3;

        fb.put_str(panel_x, y, "LIVES", label);
        fb.put_u32(panel_x, y + 1, state.lives(), value);
        y += 3;

        fb.put_str(panel_x, y, "TIME", label);
        put_clock(fb, panel_x, y + 1, state.elapsed_secs(), value);
        y += 3;

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y + 1, state.lines(), value);
        y += 3;

        const HELP: [&str; 6] = [
            "←→ move",
            "↑  rotate",
            "↓  drop",
            "P  pause",
            "R  restart",
            "Q  quit",
        ];
        for line in HELP {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y += 1;
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        lines: &[&str],
        score: Option<u32>,
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        let extra = u16::from(score.is_some());
        let total = lines.len() as u16 + extra;
        let mut y = layout.y.saturating_add(layout.frame_h.saturating_sub(total) / 2);

        let mut lines = lines.iter();
        if let Some(first) = lines.next() {
            self.put_centered(fb, layout, y, first, style);
            y += 1;
        }
        if let Some(score) = score {
            let x = layout.x + layout.frame_w.saturating_sub(6 + digit_count(score)) / 2;
            let x = fb.put_str(x, y, "SCORE ", style);
            fb.put_u32(x, y, score, style);
            y += 1;
        }
        for line in lines {
            self.put_centered(fb, layout, y, line, style);
            y += 1;
        }
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        y: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let x = layout.x.saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }
}

/// Terminal palette for the catalog colors.
pub fn palette(color: Color) -> Rgb {
    match color {
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::Blue => Rgb::new(80, 120, 220),
        Color::Orange => Rgb::new(255, 165, 0),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Purple => Rgb::new(170, 90, 220),
        Color::Red => Rgb::new(220, 80, 80),
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

/// `m:ss` clock.
fn put_clock(fb: &mut FrameBuffer, x: u16, y: u16, secs: u32, style: CellStyle) {
    let x = fb.put_u32(x, y, secs / 60, style);
    fb.put_char(x, y, ':', style);
    let s = secs % 60;
    fb.put_u32(x + 1, y, s / 10, style);
    fb.put_u32(x + 2, y, s % 10, style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_count_matches_decimal_width() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(4_294_967_295), 10);
    }

    #[test]
    fn clock_pads_seconds() {
        let mut fb = FrameBuffer::new(6, 1);
        put_clock(&mut fb, 0, 0, 125, CellStyle::default());
        assert_eq!(fb.row_text(0), "2:05  ");
    }

    #[test]
    fn every_color_has_a_distinct_palette_entry() {
        let colors = [
            Color::Cyan,
            Color::Blue,
            Color::Orange,
            Color::Yellow,
            Color::Green,
            Color::Purple,
            Color::Red,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(palette(*a), palette(*b));
            }
        }
    }
}
