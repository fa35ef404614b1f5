//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn position**: (4, 0) for every piece kind
//!
//! # Timing and Progression
//!
//! Timing values are milliseconds stored as `f64`, matching the resolution of a
//! frame clock timestamp:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 1000 | Fall interval at level 0 |
//! | `DROP_SPEEDUP` | 0.9 | Interval multiplier applied on each level up |
//! | `LINES_PER_LEVEL` | 10 | Lines needed per level |
//! | `POINTS_PER_LINE` | 100 | Score awarded per cleared row |
//! | `FRAME_MS` | 16 | Host frame period (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, PieceKind, GRID_HEIGHT, GRID_WIDTH, SPAWN_X};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! let command = Command::from_str("hardDrop").unwrap();
//! assert_eq!(command, Command::HardDrop);
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! assert_eq!(SPAWN_X, 4);
//! ```

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Spawn anchor column for every new piece: `floor(GRID_WIDTH / 2) - 1`
pub const SPAWN_X: i8 = (GRID_WIDTH / 2) as i8 - 1;

/// Spawn anchor row for every new piece
pub const SPAWN_Y: i8 = 0;

/// Milliseconds, as delivered by the host frame clock.
pub type Millis = f64;

/// Fall interval at level 0 (one row per second)
pub const BASE_DROP_MS: Millis = 1000.0;

/// Multiplier applied to the fall interval on each level up
pub const DROP_SPEEDUP: f64 = 0.9;

/// Lines required to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Score awarded for each cleared row
pub const POINTS_PER_LINE: u32 = 100;

/// Host frame period in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_column_is_left_of_center() {
        assert_eq!(SPAWN_X, 4);
        assert_eq!(SPAWN_Y, 0);
    }

    #[test]
    fn progression_defaults() {
        assert_eq!(BASE_DROP_MS, 1000.0);
        assert_eq!(DROP_SPEEDUP, 0.9);
        assert_eq!(LINES_PER_LEVEL, 10);
        assert_eq!(POINTS_PER_LINE, 100);
    }

    #[test]
    fn command_names_roundtrip() {
        for command in Command::ALL {
            assert_eq!(Command::from_str(command.as_str()), Some(command));
        }
        assert_eq!(Command::from_str("MOVELEFT"), Some(Command::MoveLeft));
        assert_eq!(Command::from_str("teleport"), None);
    }
}

/// The seven piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to uppercase letter
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Color identifier carried by pieces and locked cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Cyan => "cyan",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Green => "green",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Orange => "orange",
        }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell locked with the color of the piece that filled it
pub type Cell = Option<Color>;

/// Commands accepted by a game session
///
/// These are produced by the input layer from raw key events. Each command maps
/// to one synchronous mutation of the active piece (or none at all).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down (never locks)
    MoveDown,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Move piece to its lowest valid row without locking
    HardDrop,
    /// Accepted but has no effect
    Hold,
    /// Start a fresh session
    Reset,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::MoveDown,
        Command::Rotate,
        Command::HardDrop,
        Command::Hold,
        Command::Reset,
    ];

    /// Parse command from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("rotate"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "movedown" => Some(Command::MoveDown),
            "rotate" => Some(Command::Rotate),
            "harddrop" => Some(Command::HardDrop),
            "hold" => Some(Command::Hold),
            "reset" => Some(Command::Reset),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::MoveDown => "moveDown",
            Command::Rotate => "rotate",
            Command::HardDrop => "hardDrop",
            Command::Hold => "hold",
            Command::Reset => "reset",
        }
    }
}
