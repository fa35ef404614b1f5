//! Session module - the complete state of one game
//!
//! This module ties together all core components: board, pieces, piece source
//! and progression. It handles fall timing, piece movement, locking, line
//! clears, scoring and the game-over transition.
//!
//! The host owns a single [`Session`] and drives it with two calls:
//!
//! - [`Session::tick`] once per frame with a non-decreasing timestamp
//! - [`Session::apply`] for every player [`Command`]
//!
//! Renderers read state through accessors or a [`Snapshot`].

use tracing::{debug, info};

use crate::board::Board;
use crate::config::SessionConfig;
use crate::piece::Piece;
use crate::rng::PieceSource;
use crate::snapshot::Snapshot;
use crate::types::{Command, Millis};

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Running,
    GameOver,
}

/// What a call to [`Session::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not yet time to fall, or the session is over
    Idle,
    /// The active piece moved down one row
    Fell,
    /// The active piece locked and the next piece took over
    Locked { rows_cleared: u32, leveled_up: bool },
    /// The active piece locked and its successor had no room to spawn
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session<S> {
    config: SessionConfig,
    source: S,
    board: Board,
    active: Piece,
    next: Piece,
    score: u32,
    lines: u32,
    level: u32,
    drop_interval_ms: Millis,
    last_drop_ms: Millis,
    phase: Phase,
}

impl<S: PieceSource> Session<S> {
    /// Create a new running session with the default rules
    pub fn new(source: S) -> Self {
        Self::with_config(source, SessionConfig::default())
    }

    /// Create a new running session with custom rules
    pub fn with_config(mut source: S, config: SessionConfig) -> Self {
        let active = Piece::spawn(source.next_kind());
        let next = Piece::spawn(source.next_kind());

        Self {
            config,
            source,
            board: Board::new(),
            active,
            next,
            score: 0,
            lines: 0,
            level: 0,
            drop_interval_ms: config.base_drop_ms,
            last_drop_ms: 0.0,
            phase: Phase::Running,
        }
    }

    /// Start from a prepared board instead of an empty one
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Re-initialize to a fresh running game.
    ///
    /// The piece source keeps its state, so a seeded source continues its
    /// sequence rather than replaying it.
    pub fn reset(&mut self) {
        self.board.clear();
        self.active = Piece::spawn(self.source.next_kind());
        self.next = Piece::spawn(self.source.next_kind());
        self.score = 0;
        self.lines = 0;
        self.level = 0;
        self.drop_interval_ms = self.config.base_drop_ms;
        self.last_drop_ms = 0.0;
        self.phase = Phase::Running;
        info!("session reset");
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn drop_interval_ms(&self) -> Millis {
        self.drop_interval_ms
    }

    pub fn last_drop_ms(&self) -> Millis {
        self.last_drop_ms
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn snapshot_into(&self, out: &mut Snapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.into();
        out.next = self.next.into();
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.drop_interval_ms = self.drop_interval_ms;
        out.game_over = self.is_game_over();
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut s = Snapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance fall timing to `now` (milliseconds, non-decreasing).
    ///
    /// Once more than one drop interval has passed since the last fall, the
    /// active piece moves down a row, or locks if it cannot.
    pub fn tick(&mut self, now: Millis) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome::Idle;
        }
        if now - self.last_drop_ms <= self.drop_interval_ms {
            return TickOutcome::Idle;
        }
        self.last_drop_ms = now;

        let fallen = self.active.translated(0, 1);
        if self.board.is_valid_placement(&fallen) {
            self.active = fallen;
            return TickOutcome::Fell;
        }

        self.lock_active()
    }

    /// Apply a player command. Returns true if the session changed.
    ///
    /// Everything except `Reset` is ignored once the game is over.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Reset => {
                self.reset();
                true
            }
            _ if self.is_game_over() => false,
            Command::MoveLeft => self.try_move(-1, 0),
            Command::MoveRight => self.try_move(1, 0),
            Command::MoveDown => self.try_move(0, 1),
            Command::Rotate => self.rotate(),
            Command::HardDrop => self.hard_drop() > 0,
            // Hold is part of the command set but has no behavior.
            Command::Hold => false,
        }
    }

    /// Replace the active piece with a shifted copy if that copy fits
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let moved = self.active.translated(dx, dy);
        if !self.board.is_valid_placement(&moved) {
            return false;
        }
        self.active = moved;
        true
    }

    /// Rotate the active piece clockwise.
    ///
    /// Unless `validate_rotation` is set the rotated shape is taken as is, even
    /// when it overlaps a wall or a locked cell.
    pub(crate) fn rotate(&mut self) -> bool {
        let rotated = self.active.rotated();
        if self.config.validate_rotation && !self.board.is_valid_placement(&rotated) {
            return false;
        }
        self.active = rotated;
        true
    }

    /// Move the active piece to its lowest valid row without locking it.
    /// Returns the number of rows dropped.
    pub(crate) fn hard_drop(&mut self) -> u32 {
        let mut distance = 0;
        while self.try_move(0, 1) {
            distance += 1;
        }
        distance
    }

    /// Lock the active piece, promote the next one and score any full rows
    fn lock_active(&mut self) -> TickOutcome {
        self.board.lock(&self.active);
        debug!(
            kind = self.active.kind.as_str(),
            x = self.active.x,
            y = self.active.y,
            "piece locked"
        );

        let incoming = Piece::spawn(self.source.next_kind());
        self.active = std::mem::replace(&mut self.next, incoming);

        if !self.board.is_valid_placement(&self.active) {
            self.phase = Phase::GameOver;
            info!(
                score = self.score,
                lines = self.lines,
                level = self.level,
                "game over"
            );
            return TickOutcome::GameOver;
        }

        let rows_cleared = self.board.clear_full_rows() as u32;
        let leveled_up = self.award(rows_cleared);
        TickOutcome::Locked {
            rows_cleared,
            leveled_up,
        }
    }

    /// Add score and lines for a clear; level up at most once.
    fn award(&mut self, rows: u32) -> bool {
        if rows > 0 {
            self.score += rows * self.config.points_per_line;
            self.lines += rows;
            debug!(rows, score = self.score, lines = self.lines, "rows cleared");
        }

        if self.lines >= (self.level + 1) * self.config.lines_per_level {
            self.level += 1;
            self.drop_interval_ms *= self.config.drop_speedup;
            info!(
                level = self.level,
                drop_interval_ms = self.drop_interval_ms,
                "level up"
            );
            return true;
        }

        false
    }
}
