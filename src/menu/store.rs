// Menu persistence module
// Handles reading and writing the menu item list to a JSON file

use super::item::MenuItem;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, warn};

/// Error types for store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// File-backed store for the canonical menu item list
///
/// The store keeps no in-memory state: every `load` re-reads the file and
/// every `save` replaces it wholesale. A missing file reads as an empty
/// menu; a file that exists but cannot be read or parsed is an error, so
/// callers can tell "no items" from "store unreadable".
pub struct MenuStore {
    path: PathBuf,
}

impl MenuStore {
    /// Create a store backed by the given file path
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full item list from the backing file
    ///
    /// # Returns
    /// * `Ok(items)` on success; an absent file yields an empty list
    /// * `Err(StoreError)` when the file exists but cannot be read or parsed
    pub fn load(&self) -> Result<Vec<MenuItem>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path).map_err(|e| {
            error!(path = %self.path.display(), "Failed to read menu file: {}", e);
            StoreError::Io(e)
        })?;

        let items: Vec<MenuItem> = serde_json::from_str(&json).map_err(|e| {
            error!(path = %self.path.display(), "Failed to parse menu file: {}", e);
            StoreError::Json(e)
        })?;

        Ok(items)
    }

    /// Replace the persisted item list with `items`
    ///
    /// The collection is written pretty-printed to a temporary file next to
    /// the target and renamed into place, so readers never observe a
    /// partially written file.
    pub fn save(&self, items: &[MenuItem]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(items)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| {
            error!(path = %tmp.display(), "Failed to write menu file: {}", e);
            StoreError::Io(e)
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            error!(path = %self.path.display(), "Failed to replace menu file: {}", e);
            StoreError::Io(e)
        })?;

        Ok(())
    }

    /// Get the default path for the menu data file
    /// Honors `MENU_DATA_FILE`, falling back to `data/menu.json`
    pub fn default_path() -> PathBuf {
        match std::env::var_os("MENU_DATA_FILE") {
            Some(path) => PathBuf::from(path),
            None => {
                let fallback = PathBuf::from("data").join("menu.json");
                if !fallback.exists() {
                    warn!(
                        "Menu data file {} does not exist yet; starting empty",
                        fallback.display()
                    );
                }
                fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_items() -> Vec<MenuItem> {
        vec![
            MenuItem {
                id: 1,
                title: "Soup".to_string(),
                description: "Hot".to_string(),
                cost: Some("5 $".to_string()),
            },
            MenuItem {
                id: 2,
                title: "Salad".to_string(),
                description: "Fresh".to_string(),
                cost: Some("4 $".to_string()),
            },
        ]
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = MenuStore::new(dir.path().join("menu.json"));

        let items = sample_items();
        store.save(&items).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_save_load_is_idempotent_on_disk() {
        let dir = TempDir::new().unwrap();
        let store = MenuStore::new(dir.path().join("menu.json"));

        store.save(&sample_items()).unwrap();
        let first = fs::read_to_string(store.path()).unwrap();

        let loaded = store.load().unwrap();
        store.save(&loaded).unwrap();
        let second = fs::read_to_string(store.path()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = MenuStore::new(dir.path().join("nope.json"));

        let items = store.load().unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_an_error_not_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("menu.json");
        fs::write(&path, "{ not json").unwrap();

        let store = MenuStore::new(&path);
        match store.load() {
            Err(StoreError::Json(_)) => {}
            other => panic!("Expected JSON error, got: {:?}", other),
        }
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let store = MenuStore::new(dir.path().join("nested").join("menu.json"));

        store.save(&sample_items()).unwrap();
        assert!(store.path().exists());
    }
}
