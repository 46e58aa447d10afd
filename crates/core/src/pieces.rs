//! Pieces module - tetromino catalog and matrix rotation
//!
//! Each kind has one base orientation stored as a small occupancy matrix. Rotations
//! are not tabulated: they are computed on demand by transposing the matrix and
//! reversing each resulting row (90° clockwise about the bounding box's top-left
//! corner). There is no recentering and no wall kick table.

use arrayvec::ArrayVec;

use crate::types::{Color, PieceKind};

/// Largest matrix edge used by any tetromino
pub const MAX_SHAPE_DIM: usize = 4;

type ShapeRow = ArrayVec<bool, MAX_SHAPE_DIM>;

/// Occupancy matrix of a piece, at most 4x4, stack allocated
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: ArrayVec<ShapeRow, MAX_SHAPE_DIM>,
}

impl Shape {
    /// Build a shape from a 0/1 matrix.
    ///
    /// Rows and columns beyond [`MAX_SHAPE_DIM`] are ignored; short rows are padded
    /// with empty cells so the matrix is always rectangular.
    pub fn from_matrix(matrix: &[&[u8]]) -> Self {
        let width = matrix
            .iter()
            .take(MAX_SHAPE_DIM)
            .map(|row| row.len().min(MAX_SHAPE_DIM))
            .max()
            .unwrap_or(0);

        let rows = matrix
            .iter()
            .take(MAX_SHAPE_DIM)
            .map(|row| {
                (0..width)
                    .map(|x| row.get(x).is_some_and(|&v| v != 0))
                    .collect::<ShapeRow>()
            })
            .collect();

        Self { rows }
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Occupancy at (dy, dx); false outside the matrix
    pub fn get(&self, dy: usize, dx: usize) -> bool {
        self.rows
            .get(dy)
            .and_then(|row| row.get(dx))
            .copied()
            .unwrap_or(false)
    }

    /// Offsets `(dy, dx)` of every occupied cell, row by row
    pub fn minos(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.rows.iter().enumerate().flat_map(|(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &filled)| filled)
                .map(move |(dx, _)| (dy as i32, dx as i32))
        })
    }

    pub fn mino_count(&self) -> usize {
        self.minos().count()
    }

    /// Rotate 90° clockwise: `new[i][j] = old[h - 1 - j][i]`.
    ///
    /// The result is `height` wide and `width` tall, anchored at the same top-left.
    pub fn rotated(&self) -> Self {
        let h = self.height();
        let rows = (0..self.width())
            .map(|i| (0..h).map(|j| self.rows[h - 1 - j][i]).collect())
            .collect();
        Self { rows }
    }
}

const I_SHAPE: &[&[u8]] = &[&[1, 1, 1, 1]];
const J_SHAPE: &[&[u8]] = &[&[1, 0, 0], &[1, 1, 1]];
const L_SHAPE: &[&[u8]] = &[&[0, 0, 1], &[1, 1, 1]];
const O_SHAPE: &[&[u8]] = &[&[1, 1], &[1, 1]];
const S_SHAPE: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];
const T_SHAPE: &[&[u8]] = &[&[0, 1, 0], &[1, 1, 1]];
const Z_SHAPE: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];

/// Base (spawn) orientation for a piece kind
pub fn base_shape(kind: PieceKind) -> Shape {
    let matrix = match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    };
    Shape::from_matrix(matrix)
}

/// Display color for a piece kind
pub fn color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Cyan,
        PieceKind::J => Color::Blue,
        PieceKind::L => Color::Orange,
        PieceKind::O => Color::Yellow,
        PieceKind::S => Color::Green,
        PieceKind::T => Color::Purple,
        PieceKind::Z => Color::Red,
    }
}

/// Anchor column that centers a shape of `shape_width` on a board of `cols`.
///
/// Floor division, so a piece wider than the board gets a negative anchor.
pub fn spawn_col(cols: usize, shape_width: usize) -> i32 {
    (cols as i32 - shape_width as i32).div_euclid(2)
}
