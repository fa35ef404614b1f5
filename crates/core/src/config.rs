//! Session tuning knobs.

use crate::types::{Millis, BASE_DROP_MS, DROP_SPEEDUP, LINES_PER_LEVEL, POINTS_PER_LINE};

/// Rules a [`Session`](crate::Session) plays by
///
/// The default reproduces the classic rules: one row per second at level 0,
/// 10% faster per level, a level every 10 lines, 100 points per line, and
/// rotation applied without a placement check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Fall interval at level 0
    pub base_drop_ms: Millis,
    /// Multiplier applied to the fall interval on each level up
    pub drop_speedup: f64,
    /// Lines required per level
    pub lines_per_level: u32,
    /// Score per cleared row
    pub points_per_line: u32,
    /// Reject rotations that would overlap the walls, floor or locked cells
    pub validate_rotation: bool,
}

impl SessionConfig {
    pub fn with_validate_rotation(mut self, validate: bool) -> Self {
        self.validate_rotation = validate;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base_drop_ms: BASE_DROP_MS,
            drop_speedup: DROP_SPEEDUP,
            lines_per_level: LINES_PER_LEVEL,
            points_per_line: POINTS_PER_LINE,
            validate_rotation: false,
        }
    }
}
