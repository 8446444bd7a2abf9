//! In-memory implementation of the Store trait.
//!
//! This is primarily for testing. It has the same semantics as SQLite
//! but keeps everything in memory with no persistence.

use std::collections::HashMap;
use std::sync::RwLock;

use leaderboard_core::{StorageKey, StorageValue};

use crate::error::Result;
use crate::traits::Store;

/// In-memory store implementation.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
pub struct MemoryStore {
    words: RwLock<HashMap<StorageKey, StorageValue>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            words: RwLock::new(HashMap::new()),
        }
    }

    /// Number of keys ever written.
    pub fn len(&self) -> Result<usize> {
        Ok(self.words.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Copy out every entry. Used by tests to compare whole-store states.
    pub fn snapshot(&self) -> Result<HashMap<StorageKey, StorageValue>> {
        Ok(self.words.read()?.clone())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &StorageKey) -> Result<Option<StorageValue>> {
        let words = self.words.read()?;
        Ok(words.get(key).copied())
    }

    fn set(&self, key: &StorageKey, value: StorageValue) -> Result<()> {
        let mut words = self.words.write()?;
        words.insert(*key, value);
        Ok(())
    }

    fn apply_batch(&self, writes: &[(StorageKey, StorageValue)]) -> Result<()> {
        // A single write guard makes the batch atomic for readers.
        let mut words = self.words.write()?;
        for (key, value) in writes {
            words.insert(*key, *value);
        }
        Ok(())
    }
}
