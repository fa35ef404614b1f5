use crate::catalog::Shape;
use crate::piece::Piece;
use crate::types::{Cell, Color, Millis, PieceKind, GRID_HEIGHT, GRID_WIDTH};

/// Row-major copy of the grid
pub type Grid = [[Cell; GRID_WIDTH as usize]; GRID_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            color: value.color,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
}

impl From<Piece> for NextSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            color: value.color,
        }
    }
}

/// Read-only view of a session for renderers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub board: Grid,
    pub active: ActiveSnapshot,
    pub next: NextSnapshot,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: Millis,
    pub game_over: bool,
}

impl Snapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Absolute cells of the active piece
    pub fn active_cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.active.x, self.active.y);
        self.active
            .shape
            .minos()
            .into_iter()
            .map(move |(dx, dy)| (x + dx, y + dy))
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        let piece = Piece::spawn(PieceKind::I);
        Self {
            board: [[None; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            active: piece.into(),
            next: piece.into(),
            score: 0,
            lines: 0,
            level: 0,
            drop_interval_ms: 0.0,
            game_over: false,
        }
    }
}
