//! Piece module - a catalog shape placed on the grid
//!
//! A [`Piece`] is a plain `Copy` value. Rotation and translation never touch the
//! receiver; they return a candidate piece which the caller validates against
//! the board before committing it.

use crate::catalog::{shape_for, Minos, Shape};
use crate::types::{Color, PieceKind, SPAWN_X, SPAWN_Y};

/// A piece with its current orientation and top-left anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece in its catalog orientation at the spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        let def = shape_for(kind);
        Self {
            kind,
            shape: def.shape,
            color: def.color,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Same piece rotated 90° clockwise around the same anchor
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }

    /// Same piece with its anchor shifted by (dx, dy)
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Mino offsets relative to the anchor
    pub fn minos(&self) -> Minos {
        self.shape.minos()
    }

    /// Absolute (column, row) of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        self.shape
            .minos()
            .into_iter()
            .map(move |(dx, dy)| (x + dx, y + dy))
    }

    /// Lowest occupied absolute row
    pub fn bottom(&self) -> i8 {
        self.cells().map(|(_, y)| y).max().unwrap_or(self.y)
    }
}
