//! Key-value persistence seam for user preferences.
//!
//! The preference store reads and writes through [`KeyValueStore`] so hosts
//! can swap the backing surface: a file on disk, an in-memory map for tests,
//! or nothing at all when persistence is disabled.

pub mod file;

pub use file::FileStore;

use std::collections::BTreeMap;

use crate::error::StorageError;

/// A flat string key-value surface with single-writer semantics.
pub trait KeyValueStore {
    /// Read one value. `None` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write one value, replacing any prior value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete one key. Deleting an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store for tests and hosts without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_values() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("accent").expect("get"), None);

        store.set("accent", "#112233").expect("set");
        assert_eq!(store.get("accent").expect("get"), Some("#112233".into()));

        store.set("accent", "#445566").expect("overwrite");
        assert_eq!(store.get("accent").expect("get"), Some("#445566".into()));
    }

    #[test]
    fn memory_store_remove_is_idempotent() {
        let mut store = MemoryStore::new();
        store.set("dark", "true").expect("set");
        store.remove("dark").expect("remove");
        store.remove("dark").expect("remove again");
        assert_eq!(store.get("dark").expect("get"), None);
    }
}
