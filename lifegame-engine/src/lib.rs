//! LifeGame Engine
//!
//! Platform-agnostic core logic for LifeGame, a single-player habit
//! gamification tracker. This crate provides the progression/economy rules,
//! catalogs, badge tiers, leaderboard scoring and the persistence contract
//! without any UI or platform-specific dependencies.

pub mod badges;
pub mod catalog;
pub mod constants;
pub mod progression;
pub mod save;
pub mod score;
pub mod skills;
pub mod state;
pub mod store;

// Re-export commonly used types
pub use badges::{BadgeStatus, BadgeTier, badge_tier};
pub use catalog::{
    ActivityCatalog, ActivityDef, CatalogError, Category, RewardCatalog, UnitMode, add_activity,
    add_reward, seed_defaults, starter_activities, starter_rewards,
};
pub use progression::{
    CompletionError, CompletionOutcome, RewardError, apply_completion, claim_reward,
    complete_activity, resolve_level_ups,
};
pub use save::SaveData;
pub use score::{LeaderboardEntry, leaderboard_score};
pub use skills::{SkillTrack, classify_activity};
pub use state::{PlayerState, SkillCounters};
pub use store::{JsonFileStore, PlayerStorage, StoreError, sanitize_player_key};

use std::cmp::Ordering;

/// Engine façade tying the pure state operations to a storage backend.
///
/// State mutation itself stays in the free functions of [`progression`] and
/// [`catalog`]; this type only adds load-or-default, explicit persistence,
/// and the derived leaderboard.
pub struct LifeGame<S>
where
    S: PlayerStorage,
{
    storage: S,
}

impl<S> LifeGame<S>
where
    S: PlayerStorage,
{
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Load a player's state, or build a fresh one if no readable save
    /// exists. Either way, empty catalogs come back seeded with the starter
    /// sets.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails outright.
    pub fn get_or_create(&self, user_id: &str) -> Result<PlayerState, S::Error> {
        let mut state = self.storage.load_player(user_id)?.unwrap_or_default();
        catalog::seed_defaults(&mut state);
        Ok(state)
    }

    /// Persist a player's state. Full overwrite, last writer wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be written.
    pub fn persist(&self, user_id: &str, state: &PlayerState) -> Result<(), S::Error> {
        self.storage.save_player(user_id, state)
    }

    /// Build the leaderboard by rescanning every persisted save, sorted
    /// descending by score. Unreadable saves are skipped; ties keep
    /// enumeration order.
    ///
    /// # Errors
    ///
    /// Returns an error only if enumeration itself fails.
    pub fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, S::Error> {
        let mut rows = Vec::new();
        for player in self.storage.list_players()? {
            let Some(state) = self.storage.load_player(&player).unwrap_or(None) else {
                continue;
            };
            rows.push(LeaderboardEntry {
                player,
                level: state.level,
                score: leaderboard_score(state.level, state.xp),
            });
        }
        rows.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::convert::Infallible;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStore {
        saves: Rc<RefCell<HashMap<String, PlayerState>>>,
    }

    impl PlayerStorage for MemoryStore {
        type Error = Infallible;

        fn save_player(&self, user_id: &str, state: &PlayerState) -> Result<(), Self::Error> {
            self.saves
                .borrow_mut()
                .insert(sanitize_player_key(user_id), state.clone());
            Ok(())
        }

        fn load_player(&self, user_id: &str) -> Result<Option<PlayerState>, Self::Error> {
            Ok(self
                .saves
                .borrow()
                .get(&sanitize_player_key(user_id))
                .cloned())
        }

        fn list_players(&self) -> Result<Vec<String>, Self::Error> {
            Ok(self.saves.borrow().keys().cloned().collect())
        }

        fn delete_player(&self, user_id: &str) -> Result<(), Self::Error> {
            self.saves.borrow_mut().remove(&sanitize_player_key(user_id));
            Ok(())
        }
    }

    #[test]
    fn fresh_player_comes_seeded() {
        let game = LifeGame::new(MemoryStore::default());
        let state = game.get_or_create("Newcomer").unwrap();
        assert_eq!(state.level, 1);
        assert_eq!(state.activities.len(), 12);
        assert_eq!(state.rewards.len(), 3);
    }

    #[test]
    fn persisted_state_roundtrips_and_reseeds_empty_catalogs() {
        let game = LifeGame::new(MemoryStore::default());
        let mut state = game.get_or_create("Ana").unwrap();
        state.gold = 500.0;
        state.activities.clear();
        game.persist("Ana", &state).unwrap();

        let reloaded = game.get_or_create("Ana").unwrap();
        assert!((reloaded.gold - 500.0).abs() < f32::EPSILON);
        // The emptied catalog comes back seeded, the non-empty one untouched.
        assert_eq!(reloaded.activities.len(), 12);
        assert_eq!(reloaded.rewards.len(), 3);
    }

    #[test]
    fn colliding_names_share_one_save() {
        let game = LifeGame::new(MemoryStore::default());
        let mut state = game.get_or_create("Bob!").unwrap();
        state.gold = 77.0;
        game.persist("Bob!", &state).unwrap();

        let other = game.get_or_create("Bob").unwrap();
        assert!((other.gold - 77.0).abs() < f32::EPSILON);
    }

    #[test]
    fn leaderboard_ranks_by_level_then_xp() {
        let game = LifeGame::new(MemoryStore::default());

        let mut a = game.get_or_create("Ana").unwrap();
        a.level = 3;
        a.xp = 20.0;
        game.persist("Ana", &a).unwrap();

        let mut b = game.get_or_create("Ben").unwrap();
        b.level = 2;
        b.xp = 95.0;
        game.persist("Ben", &b).unwrap();

        let board = game.leaderboard().unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].player, "Ana");
        assert!((board[0].score - 320.0).abs() < f32::EPSILON);
        assert_eq!(board[1].player, "Ben");
        assert!((board[1].score - 295.0).abs() < f32::EPSILON);
    }
}
