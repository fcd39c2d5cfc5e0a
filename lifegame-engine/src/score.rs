//! Leaderboard scoring.

use crate::constants::SCORE_PER_LEVEL;

/// One row of the derived leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    /// Sanitized player key the save was enumerated under.
    pub player: String,
    pub level: u32,
    pub score: f32,
}

/// Total-XP-equivalent ranking key: `level * 100 + xp`.
///
/// Monotonic in level first and normalized XP second, matching the
/// 100-XP-per-level progression.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn leaderboard_score(level: u32, xp: f32) -> f32 {
    (level as f32) * SCORE_PER_LEVEL + xp
}
