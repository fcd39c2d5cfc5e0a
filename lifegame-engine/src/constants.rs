//! Centralized balance and tuning constants for LifeGame engine logic.
//!
//! These values define the deterministic math for progression, badges and
//! scoring. Keeping them together ensures that balance can only be adjusted
//! via code changes reviewed in version control.

// Progression tuning -------------------------------------------------------
pub(crate) const CRIT_CHANCE: f32 = 0.10;
pub(crate) const CRIT_MULTIPLIER: f32 = 2.0;
pub(crate) const XP_PER_LEVEL: f32 = 100.0;
pub(crate) const ENERGY_MAX: f32 = 100.0;

// Leaderboard --------------------------------------------------------------
pub(crate) const SCORE_PER_LEVEL: f32 = 100.0;

// Badge thresholds (completion counts) -------------------------------------
pub(crate) const BADGE_KING_MIN: u32 = 120;
pub(crate) const BADGE_DIAMOND_MIN: u32 = 90;
pub(crate) const BADGE_GOLD_MIN: u32 = 50;
pub(crate) const BADGE_SILVER_MIN: u32 = 21;
pub(crate) const BADGE_BRONZE_MIN: u32 = 7;

// Skill classification keywords --------------------------------------------
// Matched case-insensitively against activity names. The CJK entries keep
// saves from the original release classifying the same way.
pub(crate) const STRENGTH_KEYWORDS: &[&str] = &["gym", "fitness", "健身"];
pub(crate) const INTELLECT_KEYWORDS: &[&str] = &["focus"];
pub(crate) const WISDOM_KEYWORDS: &[&str] = &["review", "复盘"];

// Persistence --------------------------------------------------------------
pub(crate) const SAVE_FILE_PREFIX: &str = "save_";
pub(crate) const SAVE_FILE_SUFFIX: &str = ".json";
pub(crate) const SAVE_TMP_SUFFIX: &str = ".tmp";
pub(crate) const FALLBACK_PLAYER_KEY: &str = "guest";
