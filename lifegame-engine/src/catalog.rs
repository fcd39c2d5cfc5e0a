//! Activity and reward catalogs: definitions, validation, and starter seeding.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::state::PlayerState;

/// How completion quantity is measured for an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitMode {
    /// Quantity is minutes spent.
    Time,
    /// Quantity is discrete repetitions.
    #[default]
    Count,
}

impl UnitMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Count => "count",
        }
    }

    /// Short unit label for display ("min" or "unit").
    #[must_use]
    pub const fn unit_label(self) -> &'static str {
        match self {
            Self::Time => "min",
            Self::Count => "unit",
        }
    }
}

impl fmt::Display for UnitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "time" => Ok(Self::Time),
            "count" => Ok(Self::Count),
            _ => Err(()),
        }
    }
}

/// Daypart grouping used purely for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Category {
    Morning,
    Work,
    #[default]
    Life,
    Night,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Morning, Self::Work, Self::Life, Self::Night];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Work => "Work",
            Self::Life => "Life",
            Self::Night => "Night",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Morning" => Ok(Self::Morning),
            "Work" => Ok(Self::Work),
            "Life" => Ok(Self::Life),
            "Night" => Ok(Self::Night),
            _ => Err(()),
        }
    }
}

/// Per-unit numbers for one activity. The display name is the map key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityDef {
    /// XP granted per unit completed.
    pub xp_per_unit: f32,
    /// Energy change per unit; positive recovers, negative drains.
    pub energy_per_unit: f32,
    pub mode: UnitMode,
    #[serde(default)]
    pub category: Category,
}

impl ActivityDef {
    #[must_use]
    pub const fn new(
        xp_per_unit: f32,
        energy_per_unit: f32,
        mode: UnitMode,
        category: Category,
    ) -> Self {
        Self {
            xp_per_unit,
            energy_per_unit,
            mode,
            category,
        }
    }

    /// Whether completing this activity restores energy.
    #[must_use]
    pub fn is_recovering(&self) -> bool {
        self.energy_per_unit > 0.0
    }
}

/// Activity catalog keyed by display name. Later insertion overwrites.
pub type ActivityCatalog = BTreeMap<String, ActivityDef>;

/// Reward catalog keyed by display name, value is gold cost.
pub type RewardCatalog = BTreeMap<String, f32>;

/// Validation failures for catalog edits.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("xp per unit must be non-negative, got {xp}")]
    NegativeXp { xp: f32 },
    #[error("reward cost must be non-negative, got {cost}")]
    NegativeCost { cost: f32 },
}

/// Insert or overwrite an activity definition after validating it.
///
/// # Errors
///
/// Returns `CatalogError` when the trimmed name is empty or the XP rate is
/// negative. Energy per unit may be any sign.
pub fn add_activity(
    state: &mut PlayerState,
    name: &str,
    def: ActivityDef,
) -> Result<(), CatalogError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CatalogError::EmptyName);
    }
    if def.xp_per_unit < 0.0 {
        return Err(CatalogError::NegativeXp {
            xp: def.xp_per_unit,
        });
    }
    state.activities.insert(name.to_string(), def);
    Ok(())
}

/// Insert or overwrite a reward after validating it.
///
/// # Errors
///
/// Returns `CatalogError` when the trimmed name is empty or the cost is
/// negative.
pub fn add_reward(state: &mut PlayerState, name: &str, cost: f32) -> Result<(), CatalogError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CatalogError::EmptyName);
    }
    if cost < 0.0 {
        return Err(CatalogError::NegativeCost { cost });
    }
    state.rewards.insert(name.to_string(), cost);
    Ok(())
}

/// The twelve starter activities spanning the four dayparts.
#[must_use]
pub fn starter_activities() -> ActivityCatalog {
    use Category::{Life, Morning, Night, Work};
    use UnitMode::{Count, Time};

    let entries = [
        ("🍳 Hearty Breakfast", ActivityDef::new(2.0, 15.0, Count, Morning)),
        ("🧼 Dish Duty", ActivityDef::new(1.0, -2.0, Count, Morning)),
        ("❄️ Cold Shower", ActivityDef::new(5.0, 8.0, Count, Morning)),
        ("🔥 Focus Zone", ActivityDef::new(1.5, -0.6, Time, Work)),
        ("🚬 Smoke Break", ActivityDef::new(0.0, 3.0, Count, Life)),
        ("📱 Phone Scroll", ActivityDef::new(0.1, 0.2, Time, Life)),
        ("🚶 Long Walk", ActivityDef::new(3.0, 10.0, Count, Life)),
        ("👨‍🍳 Cook a Meal", ActivityDef::new(5.0, -5.0, Count, Life)),
        ("📺 Dinner + Sitcom", ActivityDef::new(1.0, 15.0, Time, Life)),
        ("💪 Gym Session", ActivityDef::new(2.0, -1.0, Time, Night)),
        ("📝 Daily Review", ActivityDef::new(10.0, -5.0, Count, Night)),
        ("🛌 Sleep", ActivityDef::new(0.0, 1.5, Time, Night)),
    ];
    entries
        .into_iter()
        .map(|(name, def)| (name.to_string(), def))
        .collect()
}

/// The three starter rewards.
#[must_use]
pub fn starter_rewards() -> RewardCatalog {
    [
        ("🥤 Bubble Tea", 600.0),
        ("🎮 New Game", 8000.0),
        ("✈️ Trip Abroad", 30000.0),
    ]
    .into_iter()
    .map(|(name, cost)| (name.to_string(), cost))
    .collect()
}

/// Populate empty catalogs with the starter sets. Idempotent: a non-empty
/// catalog is never touched. Returns true when anything was seeded.
pub fn seed_defaults(state: &mut PlayerState) -> bool {
    let mut seeded = false;
    if state.activities.is_empty() {
        state.activities = starter_activities();
        seeded = true;
    }
    if state.rewards.is_empty() {
        state.rewards = starter_rewards();
        seeded = true;
    }
    seeded
}
