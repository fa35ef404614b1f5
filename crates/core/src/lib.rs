//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on rendering, terminals, or input devices, making it:
//!
//! - **Deterministic**: A seeded or scripted piece source produces identical games
//! - **Testable**: Every rule is reachable through plain method calls
//! - **Portable**: Can run in any host loop (terminal, GUI, headless)
//! - **Allocation-free**: Ticks, commands and snapshots never touch the heap
//!
//! # Module Structure
//!
//! - [`catalog`]: The seven piece shapes and colors
//! - [`piece`]: Piece values with pure rotate/translate
//! - [`board`]: 10x20 grid with placement checks, locking and line clearing
//! - [`rng`]: Pluggable piece sources (seeded LCG, 7-bag, `StdRng`, fixed sequence)
//! - [`session`]: Fall timer, active/next hand-off, scoring, levels, game over
//! - [`snapshot`]: Read-only render feed
//!
//! # Game Rules
//!
//! - A new piece spawns at column 4, row 0 in its catalog orientation
//! - Once more than one drop interval has elapsed the piece falls one row, or locks
//!   if it is resting
//! - Each cleared row scores 100 points
//! - Every 10 lines the level increases and the drop interval shrinks by 10%
//! - The game ends when a freshly promoted piece overlaps the stack
//! - Rotation is clockwise with no wall kicks and no placement check (configurable)
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Session, SimpleRng};
//! use blockfall_types::Command;
//!
//! let mut session = Session::new(SimpleRng::new(12345));
//!
//! session.apply(Command::MoveRight);
//! session.apply(Command::Rotate);
//! session.apply(Command::HardDrop);
//!
//! // The dropped piece locks on the next fall tick.
//! session.tick(1001.0);
//! assert_eq!(session.board().filled_count(), 4);
//! ```

pub mod board;
pub mod catalog;
pub mod config;
pub mod piece;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use catalog::{shape_for, Shape, ShapeDefinition};
pub use config::SessionConfig;
pub use piece::Piece;
pub use rng::{PieceSource, Sequence, SevenBag, SimpleRng, StdRandom};
pub use session::{Phase, Session, TickOutcome};
pub use snapshot::{ActiveSnapshot, NextSnapshot, Snapshot};
