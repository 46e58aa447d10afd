//! Piece catalog and rotation tests

use tui_stacker::core::{base_shape, collides, color, Board, Shape};
use tui_stacker::types::{Color, PieceKind};

#[test]
fn test_every_kind_has_four_minos() {
    for kind in PieceKind::ALL {
        assert_eq!(base_shape(kind).mino_count(), 4, "{kind:?}");
    }
}

#[test]
fn test_catalog_colors() {
    let expected = [
        (PieceKind::I, Color::Cyan),
        (PieceKind::J, Color::Blue),
        (PieceKind::L, Color::Orange),
        (PieceKind::O, Color::Yellow),
        (PieceKind::S, Color::Green),
        (PieceKind::T, Color::Purple),
        (PieceKind::Z, Color::Red),
    ];
    for (kind, c) in expected {
        assert_eq!(color(kind), c);
    }
}

#[test]
fn test_four_rotations_restore_shape() {
    for kind in PieceKind::ALL {
        let base = base_shape(kind);
        let mut shape = base.clone();
        for _ in 0..4 {
            shape = shape.rotated();
        }
        assert_eq!(shape, base, "{kind:?}");
    }
}

#[test]
fn test_rotation_swaps_dimensions() {
    let i = base_shape(PieceKind::I);
    assert_eq!((i.width(), i.height()), (4, 1));
    let vertical = i.rotated();
    assert_eq!((vertical.width(), vertical.height()), (1, 4));
}

#[test]
fn test_t_rotates_clockwise() {
    // 010      10
    // 111  ->  11
    //          10
    let rotated = base_shape(PieceKind::T).rotated();
    assert_eq!(rotated, Shape::from_matrix(&[&[1, 0], &[1, 1], &[1, 0]]));
}

#[test]
fn test_collides_outside_the_board() {
    let board = Board::new(20, 10);
    let o = base_shape(PieceKind::O);

    assert!(collides(&o, 0, -1, &board));
    assert!(collides(&o, 0, 9, &board));
    assert!(collides(&o, 19, 4, &board));
    assert!(!collides(&o, 18, 4, &board));
    // Above the top edge is open space.
    assert!(!collides(&o, -2, 4, &board));
}

#[test]
fn test_collides_with_settled_cells() {
    let mut board = Board::new(20, 10);
    board.set(5, 5, Some(PieceKind::Z));
    let t = base_shape(PieceKind::T);

    // T bottom row covers (row + 1, col..col + 3).
    assert!(collides(&t, 4, 3, &board));
    assert!(!collides(&t, 3, 3, &board));
    // The T's empty corner may overlap a settled cell.
    assert!(!collides(&t, 5, 5, &board));
}
