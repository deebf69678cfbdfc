//! Durable key-value storage for the best score.
//!
//! The engine only ever reads one key at start-up and writes it when a
//! session beats the stored value.

use crate::utils::persistence::{data_path, load_json_or_default, save_json};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::warn;

/// File the scores map lives in under ~/.skyhop/.
pub const SCORES_FILENAME: &str = "scores.json";

/// Host-provided store for persisted integers.
pub trait BestScoreStore {
    /// Read the value stored under `key`, if any.
    fn load(&self, key: &str) -> Option<u32>;

    /// Write `value` under `key`.
    fn save(&mut self, key: &str, value: u32) -> io::Result<()>;
}

/// Scores kept as a JSON object on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by `path`, creating its parent directory.
    pub fn create(path: PathBuf) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self::at(path))
    }

    /// Store backed by an explicit file.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read_all(&self) -> BTreeMap<String, u32> {
        load_json_or_default(&self.path)
    }
}

impl BestScoreStore for JsonFileStore {
    fn load(&self, key: &str) -> Option<u32> {
        self.read_all().get(key).copied()
    }

    fn save(&mut self, key: &str, value: u32) -> io::Result<()> {
        let mut all = self.read_all();
        all.insert(key.to_string(), value);
        save_json(&self.path, &all)
    }
}

/// The store the game runs with: ~/.skyhop/scores.json, or memory when
/// that file cannot be set up.
pub fn open_best_score_store() -> Box<dyn BestScoreStore> {
    open_or_memory(data_path(SCORES_FILENAME))
}

/// Open a file store at `path`, falling back to memory on any error.
pub fn open_or_memory(path: io::Result<PathBuf>) -> Box<dyn BestScoreStore> {
    match path.and_then(JsonFileStore::create) {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!(error = %e, "best score will not be saved this run");
            Box::new(MemoryStore::new())
        }
    }
}

/// In-memory store for tests and `--no-save` runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, u32>,
    /// Number of successful `save` calls.
    pub writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one value.
    pub fn with(key: &str, value: u32) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value);
        store
    }
}

impl BestScoreStore for MemoryStore {
    fn load(&self, key: &str) -> Option<u32> {
        self.values.get(key).copied()
    }

    fn save(&mut self, key: &str, value: u32) -> io::Result<()> {
        self.values.insert(key.to_string(), value);
        self.writes += 1;
        Ok(())
    }
}

impl<S: BestScoreStore + ?Sized> BestScoreStore for Box<S> {
    fn load(&self, key: &str) -> Option<u32> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: u32) -> io::Result<()> {
        (**self).save(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load("k"), None);
        store.save("k", 4).unwrap();
        assert_eq!(store.load("k"), Some(4));
        assert_eq!(store.writes, 1);
    }

    #[test]
    fn test_json_store_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::at(dir.path().join(SCORES_FILENAME));
        store.save("flappyHighScore", 9).unwrap();
        store.save("other", 1).unwrap();

        let reopened = JsonFileStore::at(store.path().to_path_buf());
        assert_eq!(reopened.load("flappyHighScore"), Some(9));
        assert_eq!(reopened.load("other"), Some(1));
    }

    #[test]
    fn test_json_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::at(dir.path().join("absent.json"));
        assert_eq!(store.load("flappyHighScore"), None);
    }

    #[test]
    fn test_create_makes_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(SCORES_FILENAME);
        let mut store = JsonFileStore::create(path.clone()).unwrap();
        store.save("flappyHighScore", 2).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_open_falls_back_to_memory_when_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();

        let mut store = open_or_memory(Ok(blocker.join(SCORES_FILENAME)));
        assert_eq!(store.load("flappyHighScore"), None);
        store.save("flappyHighScore", 4).unwrap();
        assert_eq!(store.load("flappyHighScore"), Some(4));
        assert!(blocker.is_file());
    }

    #[test]
    fn test_open_falls_back_to_memory_without_home() {
        let missing = Err(io::Error::new(io::ErrorKind::NotFound, "no home"));
        let mut store = open_or_memory(missing);
        store.save("flappyHighScore", 1).unwrap();
        assert_eq!(store.load("flappyHighScore"), Some(1));
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn BestScoreStore> = Box::new(MemoryStore::with("k", 2));
        assert_eq!(store.load("k"), Some(2));
        store.save("k", 3).unwrap();
        assert_eq!(store.load("k"), Some(3));
    }
}
