//! Progression and economy rules: completions, critical rolls, leveling,
//! and reward claims.
//!
//! Every operation takes the [`PlayerState`] by `&mut` and either commits the
//! whole mutation or leaves the state untouched behind a typed rejection.
//! The only source of non-determinism is the critical-success roll, which
//! draws from a caller-supplied [`Rng`] so tests can force either branch.

use rand::Rng;
use thiserror::Error;

use crate::constants::{CRIT_CHANCE, CRIT_MULTIPLIER, ENERGY_MAX, XP_PER_LEVEL};
use crate::skills::{SkillTrack, classify_activity};
use crate::state::PlayerState;

/// Why a completion was rejected. State is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompletionError {
    #[error("quantity must be positive, got {qty}")]
    InvalidQuantity { qty: u16 },
    #[error("no activity named '{name}'")]
    UnknownActivity { name: String },
    #[error("not enough energy: need {required:.1}, have {available:.1}")]
    InsufficientEnergy { required: f32, available: f32 },
}

/// Why a reward claim was rejected. State is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RewardError {
    #[error("no reward named '{name}'")]
    UnknownReward { name: String },
    #[error("not enough gold: need {required:.0}, have {available:.0}")]
    InsufficientFunds { required: f32, available: f32 },
}

/// What a successful completion did to the state.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOutcome {
    /// XP actually granted (doubled when critical). Gold gained equals this.
    pub final_xp: f32,
    /// Signed energy change applied (before the 100 clamp).
    pub energy_delta: f32,
    /// Whether the 10% critical roll hit.
    pub critical: bool,
    /// Levels gained, zero until level-ups are resolved.
    pub levels_gained: u32,
    /// Skill tracks this completion counted toward.
    pub tracks: Vec<SkillTrack>,
}

/// Apply one activity completion without resolving level-ups.
///
/// Computes `quantity * per-unit` XP and energy, rolls the critical bonus,
/// enforces the energy floor, then commits XP, gold, energy (clamped to 100)
/// and skill counters together.
///
/// # Errors
///
/// Rejects zero quantity, unknown activity names, and completions whose
/// energy drain would push energy below zero. No partial application.
pub fn apply_completion(
    state: &mut PlayerState,
    name: &str,
    qty: u16,
    rng: &mut impl Rng,
) -> Result<CompletionOutcome, CompletionError> {
    if qty == 0 {
        return Err(CompletionError::InvalidQuantity { qty });
    }
    let Some(def) = state.activities.get(name).copied() else {
        return Err(CompletionError::UnknownActivity {
            name: name.to_string(),
        });
    };

    let qty_f = f32::from(qty);
    let raw_xp = qty_f * def.xp_per_unit;
    let energy_delta = qty_f * def.energy_per_unit;

    let critical = rng.r#gen::<f32>() < CRIT_CHANCE;
    let final_xp = if critical {
        raw_xp * CRIT_MULTIPLIER
    } else {
        raw_xp
    };

    if energy_delta < 0.0 && state.energy + energy_delta < 0.0 {
        return Err(CompletionError::InsufficientEnergy {
            required: -energy_delta,
            available: state.energy,
        });
    }

    state.xp += final_xp;
    state.gold += final_xp;
    state.energy = (state.energy + energy_delta).min(ENERGY_MAX);
    // The guard above makes a negative result impossible.
    debug_assert!(state.energy >= 0.0);

    let tracks = classify_activity(name);
    for track in &tracks {
        state.skills.bump(*track);
    }

    Ok(CompletionOutcome {
        final_xp,
        energy_delta,
        critical,
        levels_gained: 0,
        tracks,
    })
}

/// Convert banked XP into levels, 100 XP each, until XP sits below 100.
/// Returns the number of levels gained. Idempotent at the fixed point.
pub fn resolve_level_ups(state: &mut PlayerState) -> u32 {
    let mut gained = 0;
    while state.xp >= XP_PER_LEVEL {
        state.level += 1;
        state.xp -= XP_PER_LEVEL;
        gained += 1;
    }
    gained
}

/// Complete an activity and resolve any resulting level-ups in one call.
///
/// # Errors
///
/// Same rejections as [`apply_completion`]; state is unchanged on error.
pub fn complete_activity(
    state: &mut PlayerState,
    name: &str,
    qty: u16,
    rng: &mut impl Rng,
) -> Result<CompletionOutcome, CompletionError> {
    let mut outcome = apply_completion(state, name, qty, rng)?;
    outcome.levels_gained = resolve_level_ups(state);
    Ok(outcome)
}

/// Claim a reward, deducting its cost from the player's gold.
///
/// Returns the cost that was deducted.
///
/// # Errors
///
/// Rejects unknown reward names and claims the player cannot afford; gold is
/// untouched on rejection.
pub fn claim_reward(state: &mut PlayerState, name: &str) -> Result<f32, RewardError> {
    let Some(cost) = state.rewards.get(name).copied() else {
        return Err(RewardError::UnknownReward {
            name: name.to_string(),
        });
    };
    if state.gold < cost {
        return Err(RewardError::InsufficientFunds {
            required: cost,
            available: state.gold,
        });
    }
    state.gold -= cost;
    Ok(cost)
}
