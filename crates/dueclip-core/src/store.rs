//! Keyed storage for tracker records.
//!
//! The engine only requires `get`/`set` by key; it does not care what sits
//! behind them. [`JsonFileStore`] persists a key → record map as a single
//! JSON file, [`MemoryStore`] backs tests.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::CoreError;
use crate::models::TrackerData;

/// Storage key used by default for the single global record.
pub const DEFAULT_STORAGE_KEY: &str = "tracker_global";

pub trait Store {
    fn get(&self, key: &str) -> Result<Option<TrackerData>, CoreError>;
    fn set(&mut self, key: &str, data: &TrackerData) -> Result<(), CoreError>;
}

/// File-backed store: one JSON document mapping keys to records.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_map(&self) -> Result<HashMap<String, TrackerData>, CoreError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(HashMap::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }
}

impl Store for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<TrackerData>, CoreError> {
        let mut map = self.read_map()?;
        Ok(map.remove(key))
    }

    fn set(&mut self, key: &str, data: &TrackerData) -> Result<(), CoreError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), data.clone());
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&map)?)?;
        Ok(())
    }
}

/// In-memory store for tests and embedding.
#[derive(Default)]
pub struct MemoryStore {
    records: HashMap<String, TrackerData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<TrackerData>, CoreError> {
        Ok(self.records.get(key).cloned())
    }

    fn set(&mut self, key: &str, data: &TrackerData) -> Result<(), CoreError> {
        self.records.insert(key.to_string(), data.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.get(DEFAULT_STORAGE_KEY).unwrap().is_none());

        let mut data = TrackerData::default();
        data.assignments.push(Item::new("Essay", "2026-02-15"));
        store.set(DEFAULT_STORAGE_KEY, &data).unwrap();

        let loaded = store.get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(loaded.assignments.len(), 1);
        assert_eq!(loaded.assignments[0].name, "Essay");
    }

    #[test]
    fn keys_are_independent() {
        let mut store = MemoryStore::new();
        let mut data = TrackerData::default();
        data.exams.push(Item::new("Midterm", "2026-03-01"));
        store.set("spring", &data).unwrap();

        assert!(store.get("fall").unwrap().is_none());
        assert_eq!(store.get("spring").unwrap().unwrap().exams.len(), 1);
    }
}
