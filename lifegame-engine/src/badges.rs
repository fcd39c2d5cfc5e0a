//! Badge tiers earned per skill track from completion counts.

use std::fmt;

use crate::constants::{
    BADGE_BRONZE_MIN, BADGE_DIAMOND_MIN, BADGE_GOLD_MIN, BADGE_KING_MIN, BADGE_SILVER_MIN,
};

/// Badge rank for a single skill track. Ordering follows rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BadgeTier {
    Locked,
    Bronze,
    Silver,
    Gold,
    Diamond,
    King,
}

impl BadgeTier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Locked => "LOCKED",
            Self::Bronze => "BRONZE",
            Self::Silver => "SILVER",
            Self::Gold => "GOLD",
            Self::Diamond => "DIAMOND",
            Self::King => "KING",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Locked => "🔒",
            Self::Bronze => "🥉",
            Self::Silver => "🥈",
            Self::Gold => "🥇",
            Self::Diamond => "💎",
            Self::King => "👑",
        }
    }

    /// Minimum completion count that earns this tier.
    #[must_use]
    pub const fn threshold(self) -> u32 {
        match self {
            Self::Locked => 0,
            Self::Bronze => BADGE_BRONZE_MIN,
            Self::Silver => BADGE_SILVER_MIN,
            Self::Gold => BADGE_GOLD_MIN,
            Self::Diamond => BADGE_DIAMOND_MIN,
            Self::King => BADGE_KING_MIN,
        }
    }
}

impl fmt::Display for BadgeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the badge tier for a completion count. The highest qualifying
/// threshold wins.
#[must_use]
pub const fn badge_tier(count: u32) -> BadgeTier {
    if count >= BADGE_KING_MIN {
        BadgeTier::King
    } else if count >= BADGE_DIAMOND_MIN {
        BadgeTier::Diamond
    } else if count >= BADGE_GOLD_MIN {
        BadgeTier::Gold
    } else if count >= BADGE_SILVER_MIN {
        BadgeTier::Silver
    } else if count >= BADGE_BRONZE_MIN {
        BadgeTier::Bronze
    } else {
        BadgeTier::Locked
    }
}

/// Tier plus the raw count, so callers can render locked progress ("6/7").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStatus {
    pub tier: BadgeTier,
    pub count: u32,
}

impl BadgeStatus {
    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self {
            tier: badge_tier(count),
            count,
        }
    }

    /// Completion count needed for the next tier, `None` at KING.
    #[must_use]
    pub const fn next_threshold(self) -> Option<u32> {
        match self.tier {
            BadgeTier::Locked => Some(BADGE_BRONZE_MIN),
            BadgeTier::Bronze => Some(BADGE_SILVER_MIN),
            BadgeTier::Silver => Some(BADGE_GOLD_MIN),
            BadgeTier::Gold => Some(BADGE_DIAMOND_MIN),
            BadgeTier::Diamond => Some(BADGE_KING_MIN),
            BadgeTier::King => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_match_spec_examples() {
        assert_eq!(badge_tier(6), BadgeTier::Locked);
        assert_eq!(badge_tier(7), BadgeTier::Bronze);
        assert_eq!(badge_tier(21), BadgeTier::Silver);
        assert_eq!(badge_tier(50), BadgeTier::Gold);
        assert_eq!(badge_tier(90), BadgeTier::Diamond);
        assert_eq!(badge_tier(120), BadgeTier::King);
    }

    #[test]
    fn highest_qualifying_threshold_wins() {
        assert_eq!(badge_tier(200), BadgeTier::King);
        assert_eq!(badge_tier(89), BadgeTier::Gold);
    }

    #[test]
    fn locked_status_reports_bronze_progress() {
        let status = BadgeStatus::new(6);
        assert_eq!(status.tier, BadgeTier::Locked);
        assert_eq!(status.count, 6);
        assert_eq!(status.next_threshold(), Some(7));
        assert_eq!(BadgeStatus::new(500).next_threshold(), None);
    }

    #[test]
    fn tiers_order_by_rank() {
        assert!(BadgeTier::King > BadgeTier::Diamond);
        assert!(BadgeTier::Locked < BadgeTier::Bronze);
    }
}
