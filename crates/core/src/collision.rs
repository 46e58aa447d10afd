//! Collision checker - pure predicate over (shape, anchor, board)

use crate::board::Board;
use crate::pieces::Shape;

/// True if `shape` anchored at (`anchor_row`, `anchor_col`) overlaps a wall, the floor
/// or a settled cell.
///
/// Cells above the top edge never collide with board contents, so a piece may spawn
/// or rotate partially off the top.
pub fn collides(shape: &Shape, anchor_row: i32, anchor_col: i32, board: &Board) -> bool {
    shape
        .minos()
        .any(|(dy, dx)| board.is_occupied(anchor_row + dy, anchor_col + dx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::base_shape;
    use crate::types::PieceKind;

    #[test]
    fn test_walls_and_floor() {
        let board = Board::new(20, 10);
        let o = base_shape(PieceKind::O);

        assert!(!collides(&o, 0, 0, &board));
        assert!(!collides(&o, 18, 8, &board));
        assert!(collides(&o, 0, -1, &board));
        assert!(collides(&o, 0, 9, &board));
        assert!(collides(&o, 19, 0, &board));
    }

    #[test]
    fn test_above_top_is_free() {
        let mut board = Board::new(20, 10);
        let i = base_shape(PieceKind::I).rotated();

        // Vertical I with three cells above the board
        assert!(!collides(&i, -3, 0, &board));

        board.set(0, 0, Some(PieceKind::T));
        assert!(collides(&i, -3, 0, &board));
        assert!(!collides(&i, -4, 0, &board));
    }

    #[test]
    fn test_settled_cells_block() {
        let mut board = Board::new(20, 10);
        board.set(5, 5, Some(PieceKind::Z));
        let t = base_shape(PieceKind::T);

        // T occupies (0,1) (1,0) (1,1) (1,2)
        assert!(collides(&t, 4, 4, &board));
        assert!(collides(&t, 5, 4, &board));
        assert!(!collides(&t, 3, 4, &board));
        assert!(!collides(&t, 4, 6, &board));
    }
}
