//! Board module - manages the settled-cell grid
//!
//! The board is a `rows x cols` grid where each cell is empty or holds the kind of the
//! piece that locked there. Uses a flat row-major vector allocated once at creation;
//! the dimensions never change afterwards, only cell contents do.
//!
//! Coordinates: (row, col) where row 0 is the top and col 0 the left edge.
//! Rows above the top (negative) are legal positions for a falling piece but are
//! never stored.

use crate::pieces::Shape;
use crate::types::{Cell, PieceKind};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Calculate flat index from (row, col), `None` when out of range
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Occupancy as seen by collision checks.
    ///
    /// Positions left of, right of, or below the grid count as occupied. Positions
    /// above the top edge (negative row, column in range) count as free.
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        if col < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return true;
        }
        if row < 0 {
            return false;
        }
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        match self.row(row) {
            Some(cells) if !cells.is_empty() => cells.iter().all(|cell| cell.is_some()),
            _ => false,
        }
    }

    /// Borrow a single row
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Remove `row` and insert an empty row at the top.
    ///
    /// Every row above `row` shifts down by one. Returns false if out of bounds.
    pub fn clear_row(&mut self, row: usize) -> bool {
        if row >= self.rows {
            return false;
        }

        let width = self.cols;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..row * width, width);
        self.cells[..width].fill(None);

        true
    }

    /// Clear every full row and return how many were cleared.
    ///
    /// Scans bottom to top. After a clear the same index is examined again, since the
    /// row above has shifted into it.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut row = self.rows;

        while row > 0 {
            if self.is_row_full(row - 1) {
                self.clear_row(row - 1);
                cleared += 1;
            } else {
                row -= 1;
            }
        }

        cleared
    }

    /// Write the occupied cells of `shape` anchored at (row, col) as `kind`.
    ///
    /// Cells above the top edge or outside the grid are dropped. Returns the number of
    /// cells written.
    pub fn lock_shape(&mut self, shape: &Shape, row: i32, col: i32, kind: PieceKind) -> usize {
        shape
            .minos()
            .filter(|&(dy, dx)| self.set(row + dy, col + dx, Some(kind)))
            .count()
    }

    /// Number of filled cells on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_ROWS, crate::types::DEFAULT_COLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::base_shape;

    fn fill_row(board: &mut Board, row: i32) {
        for col in 0..board.cols() as i32 {
            board.set(row, col, Some(PieceKind::I));
        }
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(20, 10);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 9), Some(9));
        assert_eq!(board.index(1, 0), Some(10));
        assert_eq!(board.index(19, 9), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(0, 10), None);
        assert_eq!(board.index(20, 0), None);
    }

    #[test]
    fn test_is_occupied_edges() {
        let board = Board::new(20, 10);

        // Sides and floor block
        assert!(board.is_occupied(0, -1));
        assert!(board.is_occupied(0, 10));
        assert!(board.is_occupied(20, 0));

        // Above the top is open, unless it is also beside the grid
        assert!(!board.is_occupied(-1, 0));
        assert!(!board.is_occupied(-3, 9));
        assert!(board.is_occupied(-1, -1));
        assert!(board.is_occupied(-1, 10));
    }

    #[test]
    fn test_clear_row_shifts_down() {
        let mut board = Board::new(4, 3);
        board.set(0, 0, Some(PieceKind::T));
        board.set(1, 1, Some(PieceKind::S));
        fill_row(&mut board, 2);

        assert!(board.clear_row(2));

        assert_eq!(board.get(0, 0), Some(None));
        assert_eq!(board.get(1, 0), Some(Some(PieceKind::T)));
        assert_eq!(board.get(2, 1), Some(Some(PieceKind::S)));
        assert_eq!(board.occupied_count(), 2);
        assert!(!board.clear_row(4));
    }

    #[test]
    fn test_clear_full_rows_reexamines_shifted_row() {
        let mut board = Board::new(6, 4);
        fill_row(&mut board, 5);
        fill_row(&mut board, 4);
        board.set(3, 2, Some(PieceKind::Z));

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.get(5, 2), Some(Some(PieceKind::Z)));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_lock_shape_drops_cells_above_top() {
        let mut board = Board::new(20, 10);
        // O piece straddling the top edge: only its lower row is stored
        let written = board.lock_shape(&base_shape(PieceKind::O), -1, 4, PieceKind::O);

        assert_eq!(written, 2);
        assert_eq!(board.get(0, 4), Some(Some(PieceKind::O)));
        assert_eq!(board.get(0, 5), Some(Some(PieceKind::O)));
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_zero_width_board_has_no_full_rows() {
        let mut board = Board::new(3, 0);
        assert!(!board.is_row_full(0));
        assert_eq!(board.clear_full_rows(), 0);
    }
}
