//! Piece module - tetromino shape matrices and rotation
//!
//! Each piece is a small square boolean matrix (2x2 up to 4x4) paired
//! with its kind. Clockwise rotation transposes the matrix and reverses
//! each row; there is no wall-kick offset search, so a rotation that
//! collides at the current anchor is simply rejected.

use crate::types::{PieceKind, BOARD_WIDTH};

/// Largest shape matrix edge length (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// A square boolean occupancy matrix
///
/// Stored in a fixed 4x4 grid; cells at or beyond `size` are always
/// false, so whole-matrix equality is also sub-matrix equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from an NxN 0/1 matrix (N <= 4)
    pub fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Self {
        assert!(N >= 2 && N <= MAX_SHAPE_SIZE);
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Self {
            size: N as u8,
            cells,
        }
    }

    /// Matrix edge length (2, 3, or 4)
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the sub-cell at (x, y) is occupied
    pub fn filled(&self, x: usize, y: usize) -> bool {
        x < self.size as usize && y < self.size as usize && self.cells[y][x]
    }

    /// The shape rotated 90 degrees clockwise
    ///
    /// Transpose then reverse each row: `new[y][x] = old[n-1-x][y]`.
    /// Applying this four times returns the original matrix for every
    /// shape, the square included.
    pub fn rotated_cw(&self) -> Self {
        let n = self.size as usize;
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in cells.iter_mut().enumerate().take(n) {
            for (x, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.cells[n - 1 - x][y];
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }

    /// Iterate the (x, y) offsets of occupied sub-cells
    pub fn filled_offsets(&self) -> impl Iterator<Item = (i8, i8)> {
        let cells = self.cells;
        let n = self.size as usize;
        (0..n).flat_map(move |y| {
            (0..n)
                .filter(move |&x| cells[y][x])
                .map(move |x| (x as i8, y as i8))
        })
    }
}

/// Canonical starting-orientation matrix for a piece kind
pub fn template(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows([
            [0, 0, 0, 0],
            [1, 1, 1, 1],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]),
        PieceKind::J => Shape::from_rows([
            [1, 0, 0],
            [1, 1, 1],
            [0, 0, 0],
        ]),
        PieceKind::L => Shape::from_rows([
            [0, 0, 1],
            [1, 1, 1],
            [0, 0, 0],
        ]),
        PieceKind::O => Shape::from_rows([
            [1, 1],
            [1, 1],
        ]),
        PieceKind::S => Shape::from_rows([
            [0, 1, 1],
            [1, 1, 0],
            [0, 0, 0],
        ]),
        PieceKind::T => Shape::from_rows([
            [0, 1, 0],
            [1, 1, 1],
            [0, 0, 0],
        ]),
        PieceKind::Z => Shape::from_rows([
            [1, 1, 0],
            [0, 1, 1],
            [0, 0, 0],
        ]),
    }
}

/// The falling piece: shape matrix, kind (color token), and the
/// top-left anchor of the matrix in board space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at its spawn position: horizontally centered
    /// (`x = W/2 - size/2`), anchored at the top row, unrotated.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = template(kind);
        let x = (BOARD_WIDTH / 2) as i8 - (shape.size() / 2) as i8;
        Self {
            kind,
            shape,
            x,
            y: 0,
        }
    }
}
