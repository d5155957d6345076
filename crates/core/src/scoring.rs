//! Scoring module - score, line, and level progression
//!
//! Score and level derive purely from the cumulative cleared-line count:
//! - A clear of N lines scores `N * LINE_SCORE * level`, using the level in
//!   effect *before* the clear.
//! - Level is `1 + lines / LINES_PER_LEVEL`.
//! - Nothing else awards points.

use serde::{Deserialize, Serialize};

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_FLOOR_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORE,
};

/// Score, cumulative lines, and level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreState {
    score: u32,
    lines: u32,
    level: u32,
}

impl ScoreState {
    /// Start-of-game state: score 0, lines 0, level 1
    pub fn new() -> Self {
        Self {
            score: 0,
            lines: 0,
            level: 1,
        }
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

    /// Record a clear of `rows_cleared` lines and return the points awarded
    ///
    /// Zero rows changes nothing.
    pub fn apply_clear(&mut self, rows_cleared: u32) -> u32 {
        if rows_cleared == 0 {
            return 0;
        }
        let points = calculate_line_score(rows_cleared, self.level);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(rows_cleared);
        self.level = calculate_level(self.lines);
        points
    }

    /// Back to the start-of-game state
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::new()
    }
}

/// Points for clearing `lines` rows at `level`
pub fn calculate_line_score(lines: u32, level: u32) -> u32 {
    lines.saturating_mul(LINE_SCORE).saturating_mul(level)
}

/// Level for a cumulative line count (1-based)
pub fn calculate_level(total_lines: u32) -> u32 {
    1 + total_lines / LINES_PER_LEVEL
}

/// Gravity cadence for a level (in milliseconds)
///
/// 500ms at level 1, 40ms faster per level, never below the floor.
pub fn get_drop_interval_ms(level: u32) -> u32 {
    let steps = level.saturating_sub(1);
    BASE_DROP_MS
        .saturating_sub(steps.saturating_mul(DROP_STEP_MS))
        .max(DROP_INTERVAL_FLOOR_MS)
}
