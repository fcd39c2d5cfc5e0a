//! Skill track classification.
//!
//! Tracks are assigned by keyword match against the activity *name*, not the
//! declared category. This is deliberate: renaming an activity changes how it
//! counts, and an activity whose name hits multiple keyword lists feeds
//! multiple tracks. The keyword lists live in [`crate::constants`] so the
//! association has a single point of change.

use std::fmt;

use crate::constants::{INTELLECT_KEYWORDS, STRENGTH_KEYWORDS, WISDOM_KEYWORDS};

/// The three tracked skill tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillTrack {
    Strength,
    Intellect,
    Wisdom,
}

impl SkillTrack {
    pub const ALL: [Self; 3] = [Self::Strength, Self::Intellect, Self::Wisdom];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Intellect => "Intellect",
            Self::Wisdom => "Wisdom",
        }
    }

    /// Three-letter label used on badge cards.
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Intellect => "INT",
            Self::Wisdom => "WIS",
        }
    }

    const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Strength => STRENGTH_KEYWORDS,
            Self::Intellect => INTELLECT_KEYWORDS,
            Self::Wisdom => WISDOM_KEYWORDS,
        }
    }
}

impl fmt::Display for SkillTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an activity name into the skill tracks it feeds.
///
/// Matching is case-insensitive substring search. Returns an empty vec for
/// names that hit no keyword list.
#[must_use]
pub fn classify_activity(name: &str) -> Vec<SkillTrack> {
    let lowered = name.to_lowercase();
    SkillTrack::ALL
        .into_iter()
        .filter(|track| {
            track
                .keywords()
                .iter()
                .any(|keyword| lowered.contains(keyword))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_names_classify_as_expected() {
        assert_eq!(classify_activity("💪 Gym Session"), vec![SkillTrack::Strength]);
        assert_eq!(classify_activity("🔥 Focus Zone"), vec![SkillTrack::Intellect]);
        assert_eq!(classify_activity("📝 Daily Review"), vec![SkillTrack::Wisdom]);
        assert!(classify_activity("🛌 Sleep").is_empty());
    }

    #[test]
    fn classification_ignores_case_and_category() {
        assert_eq!(classify_activity("FOCUS sprint"), vec![SkillTrack::Intellect]);
        assert_eq!(classify_activity("morning GYM"), vec![SkillTrack::Strength]);
    }

    #[test]
    fn legacy_cjk_names_still_classify() {
        assert_eq!(classify_activity("💪 健身房"), vec![SkillTrack::Strength]);
        assert_eq!(classify_activity("📝 每日复盘"), vec![SkillTrack::Wisdom]);
    }

    #[test]
    fn name_can_feed_multiple_tracks() {
        let tracks = classify_activity("Gym focus review marathon");
        assert_eq!(
            tracks,
            vec![SkillTrack::Strength, SkillTrack::Intellect, SkillTrack::Wisdom]
        );
    }
}
