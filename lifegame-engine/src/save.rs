//! On-disk save format and migration.
//!
//! One JSON document per player. Activities are stored as positional arrays
//! (`[xp_per_unit, energy_per_unit, mode]` with an optional trailing
//! category) for compatibility with saves from the original release. Legacy
//! three-element entries migrate to `Category::Life` here, once, at load
//! time; malformed entries are dropped individually without failing the rest
//! of the document. Writes always emit the four-element form.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeMap;

use crate::catalog::{ActivityDef, Category, UnitMode};
use crate::state::{PlayerState, SkillCounters};

const fn default_level() -> u32 {
    1
}

const fn default_energy() -> f32 {
    100.0
}

/// Serde view of one player save. Field names are the wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveData {
    #[serde(default)]
    pub xp: f32,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default = "default_energy")]
    pub energy: f32,
    #[serde(default)]
    pub gold: f32,
    #[serde(default)]
    pub count_gym: u32,
    #[serde(default)]
    pub count_focus: u32,
    #[serde(default)]
    pub count_review: u32,
    /// Name -> positional array; parsed leniently in [`SaveData::into_state`].
    #[serde(default)]
    pub activities: BTreeMap<String, Value>,
    #[serde(default)]
    pub rewards: BTreeMap<String, f32>,
}

impl SaveData {
    /// Snapshot a live state into wire form.
    #[must_use]
    pub fn from_state(state: &PlayerState) -> Self {
        Self {
            xp: state.xp,
            level: state.level,
            energy: state.energy,
            gold: state.gold,
            count_gym: state.skills.gym,
            count_focus: state.skills.focus,
            count_review: state.skills.review,
            activities: state
                .activities
                .iter()
                .map(|(name, def)| (name.clone(), activity_to_value(def)))
                .collect(),
            rewards: state.rewards.clone(),
        }
    }

    /// Rebuild a live state, skipping activity entries that fail to parse.
    #[must_use]
    pub fn into_state(self) -> PlayerState {
        let activities = self
            .activities
            .into_iter()
            .filter_map(|(name, value)| activity_from_value(&value).map(|def| (name, def)))
            .collect();
        PlayerState {
            xp: self.xp,
            level: self.level,
            energy: self.energy,
            gold: self.gold,
            skills: SkillCounters {
                gym: self.count_gym,
                focus: self.count_focus,
                review: self.count_review,
            },
            activities,
            rewards: self.rewards,
        }
    }
}

fn activity_to_value(def: &ActivityDef) -> Value {
    json!([
        def.xp_per_unit,
        def.energy_per_unit,
        def.mode.as_str(),
        def.category.as_str(),
    ])
}

/// Parse one positional activity entry. Three elements default the category
/// to `Life`; an unrecognized category string also falls back to `Life`
/// (matching how the original release rendered unknown categories). Any
/// other shape is malformed and yields `None`.
fn activity_from_value(value: &Value) -> Option<ActivityDef> {
    let parts = value.as_array()?;
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let xp_per_unit = parts[0].as_f64()? as f32;
    #[allow(clippy::cast_possible_truncation)]
    let energy_per_unit = parts[1].as_f64()? as f32;
    let mode = parts[2].as_str()?.parse::<UnitMode>().ok()?;
    let category = match parts.get(3) {
        Some(raw) => raw
            .as_str()?
            .parse::<Category>()
            .unwrap_or(Category::Life),
        None => Category::Life,
    };
    Some(ActivityDef::new(xp_per_unit, energy_per_unit, mode, category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{add_activity, add_reward};
    use crate::skills::SkillTrack;

    #[test]
    fn state_roundtrips_through_wire_form() {
        let mut state = PlayerState::default();
        state.xp = 42.5;
        state.level = 7;
        state.energy = 63.0;
        state.gold = 1234.0;
        state.skills.bump(SkillTrack::Intellect);
        let def = ActivityDef::new(1.5, -0.6, UnitMode::Time, Category::Work);
        add_activity(&mut state, "Focus Zone", def).unwrap();
        add_reward(&mut state, "Bubble Tea", 600.0).unwrap();

        let wire = SaveData::from_state(&state);
        let json = serde_json::to_string(&wire).unwrap();
        let restored: SaveData = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.into_state(), state);
    }

    #[test]
    fn activities_serialize_as_four_element_arrays() {
        let mut state = PlayerState::default();
        let def = ActivityDef::new(2.0, -1.0, UnitMode::Time, Category::Night);
        add_activity(&mut state, "Gym", def).unwrap();

        let value = serde_json::to_value(SaveData::from_state(&state)).unwrap();
        assert_eq!(value["activities"]["Gym"], json!([2.0, -1.0, "time", "Night"]));
    }

    #[test]
    fn legacy_three_element_entry_defaults_to_life() {
        let json = r#"{
            "xp": 10.0,
            "level": 2,
            "energy": 80.0,
            "gold": 50.0,
            "count_gym": 0,
            "count_focus": 0,
            "count_review": 0,
            "activities": { "Old Habit": [1.0, -0.5, "count"] },
            "rewards": {}
        }"#;
        let state: PlayerState = serde_json::from_str::<SaveData>(json)
            .unwrap()
            .into_state();
        assert_eq!(state.activities["Old Habit"].category, Category::Life);
    }

    #[test]
    fn malformed_entries_are_skipped_not_fatal() {
        let json = r#"{
            "activities": {
                "Good": [1.0, 0.5, "count", "Morning"],
                "TooShort": [1.0, 0.5],
                "BadMode": [1.0, 0.5, "hours"],
                "NotArray": "nope",
                "BadNumber": ["x", 0.5, "count"]
            }
        }"#;
        let state: PlayerState = serde_json::from_str::<SaveData>(json)
            .unwrap()
            .into_state();
        assert_eq!(state.activities.len(), 1);
        assert!(state.activities.contains_key("Good"));
    }

    #[test]
    fn missing_scalars_take_defaults() {
        let state: PlayerState = serde_json::from_str::<SaveData>("{}")
            .unwrap()
            .into_state();
        assert_eq!(state.level, 1);
        assert!((state.energy - 100.0).abs() < f32::EPSILON);
        assert!(state.xp.abs() < f32::EPSILON);
    }

    #[test]
    fn unknown_category_string_falls_back_to_life() {
        let json = r#"{ "activities": { "Odd": [1.0, 0.0, "time", "Afternoon"] } }"#;
        let state: PlayerState = serde_json::from_str::<SaveData>(json)
            .unwrap()
            .into_state();
        assert_eq!(state.activities["Odd"].category, Category::Life);
    }
}
