//! Catalog module - the seven piece shapes and their colors
//!
//! Shapes are stored as small occupancy matrices (at most 4x4) in their spawn
//! orientation. Rotation produces a new matrix with rows and columns swapped, so
//! the I piece alternates between 1x4 and 4x1.

use arrayvec::ArrayVec;

use crate::types::{Color, PieceKind};

/// Largest matrix side used by any shape
pub const MAX_SPAN: usize = 4;

/// Number of occupied cells in every shape
pub const MINO_COUNT: usize = 4;

/// Offset of a single mino relative to the piece anchor, as (column, row)
pub type MinoOffset = (i8, i8);

/// Occupied offsets of a shape, in row-major order
pub type Minos = ArrayVec<MinoOffset, MINO_COUNT>;

/// Occupancy matrix of a piece in one orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    bits: [[bool; MAX_SPAN]; MAX_SPAN],
}

impl Shape {
    const fn from_matrix(rows: u8, cols: u8, m: [[u8; MAX_SPAN]; MAX_SPAN]) -> Self {
        let mut bits = [[false; MAX_SPAN]; MAX_SPAN];
        let mut r = 0;
        while r < MAX_SPAN {
            let mut c = 0;
            while c < MAX_SPAN {
                bits[r][c] = m[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self { rows, cols, bits }
    }

    /// Number of matrix rows
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of matrix columns
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the matrix cell at (row, col) is occupied.
    /// Cells outside the matrix are empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.bits[row][col]
    }

    /// 90° clockwise rotation: `new[i][j] = old[rows - 1 - j][i]`
    pub fn rotated_cw(&self) -> Self {
        let rows = self.rows as usize;
        let mut bits = [[false; MAX_SPAN]; MAX_SPAN];
        for (i, out_row) in bits.iter_mut().enumerate().take(self.cols as usize) {
            for (j, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.bits[rows - 1 - j][i];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }

    /// Occupied (column, row) offsets
    pub fn minos(&self) -> Minos {
        let mut out = Minos::new();
        for row in 0..self.rows as usize {
            for col in 0..self.cols as usize {
                if self.bits[row][col] {
                    out.push((col as i8, row as i8));
                }
            }
        }
        out
    }

    /// Matrix rows as 0/1 vectors, handy for assertions and debugging
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        (0..self.rows as usize)
            .map(|r| {
                (0..self.cols as usize)
                    .map(|c| self.bits[r][c] as u8)
                    .collect()
            })
            .collect()
    }
}

/// Immutable catalog entry: spawn shape plus color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDefinition {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
}

/// The full catalog, in [`PieceKind::ALL`] order
pub static CATALOG: [ShapeDefinition; 7] = [
    ShapeDefinition {
        kind: PieceKind::I,
        shape: Shape::from_matrix(1, 4, [[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]]),
        color: Color::Cyan,
    },
    ShapeDefinition {
        kind: PieceKind::O,
        shape: Shape::from_matrix(2, 2, [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]),
        color: Color::Yellow,
    },
    ShapeDefinition {
        kind: PieceKind::T,
        shape: Shape::from_matrix(2, 3, [[0, 1, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]),
        color: Color::Purple,
    },
    ShapeDefinition {
        kind: PieceKind::S,
        shape: Shape::from_matrix(2, 3, [[0, 1, 1, 0], [1, 1, 0, 0], [0; 4], [0; 4]]),
        color: Color::Green,
    },
    ShapeDefinition {
        kind: PieceKind::Z,
        shape: Shape::from_matrix(2, 3, [[1, 1, 0, 0], [0, 1, 1, 0], [0; 4], [0; 4]]),
        color: Color::Red,
    },
    ShapeDefinition {
        kind: PieceKind::J,
        shape: Shape::from_matrix(2, 3, [[1, 0, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]),
        color: Color::Blue,
    },
    ShapeDefinition {
        kind: PieceKind::L,
        shape: Shape::from_matrix(2, 3, [[0, 0, 1, 0], [1, 1, 1, 0], [0; 4], [0; 4]]),
        color: Color::Orange,
    },
];

/// Look up the spawn shape and color for a piece kind
pub fn shape_for(kind: PieceKind) -> &'static ShapeDefinition {
    let idx = match kind {
        PieceKind::I => 0,
        PieceKind::O => 1,
        PieceKind::T => 2,
        PieceKind::S => 3,
        PieceKind::Z => 4,
        PieceKind::J => 5,
        PieceKind::L => 6,
    };
    &CATALOG[idx]
}
