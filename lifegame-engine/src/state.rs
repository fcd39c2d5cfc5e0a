//! Mutable player record: progression stats, skill counters, and owned catalogs.

use crate::catalog::{ActivityCatalog, RewardCatalog};
use crate::constants::ENERGY_MAX;
use crate::skills::SkillTrack;

/// Completion counts for the three tracked skill tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SkillCounters {
    /// Strength completions (gym/fitness activities).
    pub gym: u32,
    /// Intellect completions (focus activities).
    pub focus: u32,
    /// Wisdom completions (review/reflection activities).
    pub review: u32,
}

impl SkillCounters {
    #[must_use]
    pub const fn count(&self, track: SkillTrack) -> u32 {
        match track {
            SkillTrack::Strength => self.gym,
            SkillTrack::Intellect => self.focus,
            SkillTrack::Wisdom => self.review,
        }
    }

    pub const fn bump(&mut self, track: SkillTrack) {
        match track {
            SkillTrack::Strength => self.gym += 1,
            SkillTrack::Intellect => self.focus += 1,
            SkillTrack::Wisdom => self.review += 1,
        }
    }
}

/// The full mutable record for one player.
///
/// State is a plain value: engine operations take it by `&mut` and callers
/// decide when to persist. There is no ambient store inside the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Experience toward the next level; normalized below 100 by
    /// [`crate::progression::resolve_level_ups`].
    pub xp: f32,
    /// Current level, starts at 1, no upper bound.
    pub level: u32,
    /// Energy in `[0, 100]`.
    pub energy: f32,
    /// Spendable currency. Gains track final (possibly critical) XP.
    pub gold: f32,
    pub skills: SkillCounters,
    pub activities: ActivityCatalog,
    pub rewards: RewardCatalog,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            xp: 0.0,
            level: 1,
            energy: ENERGY_MAX,
            gold: 0.0,
            skills: SkillCounters::default(),
            activities: ActivityCatalog::new(),
            rewards: RewardCatalog::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_player_starts_at_full_energy() {
        let state = PlayerState::default();
        assert_eq!(state.level, 1);
        assert!((state.energy - 100.0).abs() < f32::EPSILON);
        assert!(state.xp.abs() < f32::EPSILON);
        assert!(state.gold.abs() < f32::EPSILON);
        assert!(state.activities.is_empty());
    }

    #[test]
    fn counters_bump_per_track() {
        let mut skills = SkillCounters::default();
        skills.bump(SkillTrack::Wisdom);
        skills.bump(SkillTrack::Wisdom);
        skills.bump(SkillTrack::Strength);
        assert_eq!(skills.count(SkillTrack::Wisdom), 2);
        assert_eq!(skills.count(SkillTrack::Strength), 1);
        assert_eq!(skills.count(SkillTrack::Intellect), 0);
    }
}
