// Key-value state store - one JSON file per key under the platform data dir

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not determine data directory")]
    NoDataDir,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

/// Durable key-value storage. Reads are forgiving (missing or corrupt keys
/// yield `None`), writes report their failure so callers can surface it.
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    pub fn open() -> Result<Self, StorageError> {
        let dirs = directories::ProjectDirs::from("", "", "devteam")
            .ok_or(StorageError::NoDataDir)?;
        let root = dirs.data_dir().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn with_root(root: PathBuf) -> Result<Self, StorageError> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.key_path(key);
        if !path.exists() {
            return None;
        }
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(key, error = %e, "discarding corrupt stored value");
                    None
                }
            },
            Err(e) => {
                tracing::warn!(key, error = %e, "error reading from storage");
                None
            }
        }
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let contents = serde_json::to_string_pretty(value)?;
        fs::write(self.key_path(key), contents)?;
        Ok(())
    }

    pub fn remove(&self, key: &str) {
        let path = self.key_path(key);
        if path.exists() {
            if let Err(e) = fs::remove_file(&path) {
                tracing::warn!(key, error = %e, "error removing stored value");
            }
        }
    }

    /// Drop every stored key (the `--reset-state` path).
    pub fn clear(&self) {
        let Ok(entries) = fs::read_dir(&self.root) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Err(e) = fs::remove_file(&path) {
                    tracing::warn!(path = %path.display(), error = %e, "error clearing storage");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{NavigationState, Page};
    use chrono::Utc;

    fn temp_storage() -> (tempfile::TempDir, Storage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::with_root(dir.path().join("state")).unwrap();
        (dir, storage)
    }

    #[test]
    fn navigation_state_round_trip() {
        let (_dir, storage) = temp_storage();
        let state = NavigationState {
            current_page: Page::Blog,
            options: None,
            timestamp: Utc::now(),
        };
        storage.set("navigationState", &state).unwrap();

        let restored: NavigationState = storage.get("navigationState").unwrap();
        assert_eq!(restored.current_page, Page::Blog);
        assert!(restored.is_fresh(Utc::now()));
    }

    #[test]
    fn stale_state_is_not_fresh() {
        let state = NavigationState {
            current_page: Page::Blog,
            options: None,
            timestamp: Utc::now() - chrono::Duration::minutes(31),
        };
        assert!(!state.is_fresh(Utc::now()));
    }

    #[test]
    fn missing_and_corrupt_keys_read_as_none() {
        let (_dir, storage) = temp_storage();
        assert!(storage.get::<NavigationState>("navigationState").is_none());

        std::fs::write(storage.key_path("navigationState"), "{not json").unwrap();
        assert!(storage.get::<NavigationState>("navigationState").is_none());
    }

    #[test]
    fn clear_removes_all_keys() {
        let (_dir, storage) = temp_storage();
        storage.set("theme", &"dark").unwrap();
        storage.set("other", &1).unwrap();
        storage.clear();
        assert!(storage.get::<String>("theme").is_none());
        assert!(storage.get::<i32>("other").is_none());
    }
}
