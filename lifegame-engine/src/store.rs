//! Persistence: the storage contract and the JSON flat-file backend.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{FALLBACK_PLAYER_KEY, SAVE_FILE_PREFIX, SAVE_FILE_SUFFIX, SAVE_TMP_SUFFIX};
use crate::save::SaveData;
use crate::state::PlayerState;

/// Trait for abstracting player save/load operations.
/// Platform-specific backends should provide this.
pub trait PlayerStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist the full state for a player. Full overwrite, no merge.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be written.
    fn save_player(&self, user_id: &str, state: &PlayerState) -> Result<(), Self::Error>;

    /// Load the state for a player. Absent records yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend itself fails; a missing or corrupt
    /// record is not an error.
    fn load_player(&self, user_id: &str) -> Result<Option<PlayerState>, Self::Error>;

    /// Enumerate all persisted player keys, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be enumerated.
    fn list_players(&self) -> Result<Vec<String>, Self::Error>;

    /// Delete a player's save if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the save exists but cannot be removed.
    fn delete_player(&self, user_id: &str) -> Result<(), Self::Error>;
}

/// Reduce a free-text username to a storage key: alphanumeric characters
/// only, with a reserved fallback for names that sanitize to nothing.
/// Distinct names may collide onto the same key; that is accepted behavior.
#[must_use]
pub fn sanitize_player_key(user_id: &str) -> String {
    let key: String = user_id.chars().filter(|c| c.is_alphanumeric()).collect();
    if key.is_empty() {
        FALLBACK_PLAYER_KEY.to_string()
    } else {
        key
    }
}

/// Errors from the flat-file store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("save file i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("save serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One `save_<key>.json` per player under a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn save_path(&self, key: &str) -> PathBuf {
        self.dir
            .join(format!("{SAVE_FILE_PREFIX}{key}{SAVE_FILE_SUFFIX}"))
    }

    fn key_from_file_name(name: &str) -> Option<&str> {
        name.strip_prefix(SAVE_FILE_PREFIX)?
            .strip_suffix(SAVE_FILE_SUFFIX)
    }
}

impl PlayerStorage for JsonFileStore {
    type Error = StoreError;

    fn save_player(&self, user_id: &str, state: &PlayerState) -> Result<(), Self::Error> {
        fs::create_dir_all(&self.dir)?;
        let path = self.save_path(&sanitize_player_key(user_id));
        let json = serde_json::to_string_pretty(&SaveData::from_state(state))?;
        // Write-then-rename keeps a crashed save from clobbering the old one.
        let tmp = path.with_extension(format!("json{SAVE_TMP_SUFFIX}"));
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn load_player(&self, user_id: &str) -> Result<Option<PlayerState>, Self::Error> {
        let path = self.save_path(&sanitize_player_key(user_id));
        // Missing, unreadable and corrupt saves all load as absent; the
        // caller rebuilds from defaults rather than aborting.
        let Ok(raw) = fs::read_to_string(&path) else {
            return Ok(None);
        };
        match serde_json::from_str::<SaveData>(&raw) {
            Ok(data) => Ok(Some(data.into_state())),
            Err(_) => Ok(None),
        }
    }

    fn list_players(&self) -> Result<Vec<String>, Self::Error> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        let mut players = Vec::new();
        for entry in entries {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if let Some(key) = Self::key_from_file_name(name) {
                players.push(key.to_string());
            }
        }
        Ok(players)
    }

    fn delete_player(&self, user_id: &str) -> Result<(), Self::Error> {
        let path = self.save_path(&sanitize_player_key(user_id));
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitization_strips_to_alphanumeric() {
        assert_eq!(sanitize_player_key("Bob!"), "Bob");
        assert_eq!(sanitize_player_key("Bob"), "Bob");
        assert_eq!(sanitize_player_key("a b-c_9"), "abc9");
        assert_eq!(sanitize_player_key("!!!"), "guest");
        assert_eq!(sanitize_player_key(""), "guest");
    }

    #[test]
    fn save_file_names_roundtrip_keys() {
        let store = JsonFileStore::new("saves");
        let path = store.save_path("Bob");
        assert!(path.ends_with("save_Bob.json"));
        assert_eq!(JsonFileStore::key_from_file_name("save_Bob.json"), Some("Bob"));
        assert_eq!(JsonFileStore::key_from_file_name("save_Bob.json.tmp"), None);
        assert_eq!(JsonFileStore::key_from_file_name("notes.txt"), None);
    }
}
