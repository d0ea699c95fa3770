//! Key/value persistence port and its disk-backed implementation.
//!
//! The dashboard persists exactly two strings (the visit flag and the
//! countdown target), so the production store is a small JSON map written
//! through on every mutation. Absent or unreadable files degrade to an
//! empty store; they are never surfaced as errors.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

/// Injected storage port. Production uses [`FileStore`]; tests use
/// [`MemoryStore`] for deterministic, disk-free runs.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// JSON map persisted under the platform data directory.
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing or malformed file is treated as
    /// an empty store; the next write replaces it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match load_values(&path) {
            Ok(values) => values,
            Err(err) => {
                log::warn!("treating store at {} as empty: {err:#}", path.display());
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    /// Open the store at its standard platform location.
    pub fn open_default() -> Self {
        Self::open(Self::resolve_default_path())
    }

    fn resolve_default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "SprintTools", "SprintSnapshot") {
            let dir = dirs.data_dir();
            std::fs::create_dir_all(dir).ok();
            dir.join("state.json")
        } else {
            log::warn!("Unable to resolve project directory; using current dir for state");
            PathBuf::from("state.json")
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) {
        if let Err(err) = save_values(&self.path, &self.values) {
            // Degrade to a non-persistent session rather than failing.
            log::warn!("failed to persist store at {}: {err:#}", self.path.display());
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.persist();
    }

    fn remove(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            self.persist();
        }
    }
}

fn load_values(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read store from {}", path.display()))?;
    let values = serde_json::from_str(&data)
        .with_context(|| format!("failed to deserialize store from {}", path.display()))?;
    Ok(values)
}

fn save_values(path: &Path, values: &BTreeMap<String, String>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = serde_json::to_string_pretty(values)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write store to {}", path.display()))?;
    Ok(())
}

/// In-memory store used as a fake in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_store_round_trips_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");

        {
            let mut store = FileStore::open(&path);
            store.set("flag", "true");
            store.set("target", "1234");
        }

        let store = FileStore::open(&path);
        assert_eq!(store.get("flag"), Some("true".to_string()));
        assert_eq!(store.get("target"), Some("1234".to_string()));
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path().join("absent.json"));
        assert_eq!(store.get("anything"), None);
    }

    #[test]
    fn malformed_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "not json at all").unwrap();

        let store = FileStore::open(&path);
        assert_eq!(store.get("flag"), None);
    }

    #[test]
    fn remove_deletes_the_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");

        let mut store = FileStore::open(&path);
        store.set("flag", "true");
        store.remove("flag");
        assert_eq!(store.get("flag"), None);

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("flag"), None);
    }

    #[test]
    fn memory_store_behaves_like_the_port() {
        let mut store = MemoryStore::default();
        assert_eq!(store.get("k"), None);
        store.set("k", "v");
        assert_eq!(store.get("k"), Some("v".to_string()));
        store.remove("k");
        assert_eq!(store.get("k"), None);
    }
}
