//! Store trait: the abstract interface for word persistence.
//!
//! This trait allows the contract to be storage-agnostic. Implementations
//! include SQLite (primary), in-memory (for tests), and the per-command
//! [`Overlay`](crate::Overlay).

use leaderboard_core::{StorageKey, StorageValue};

use crate::error::Result;

/// The Store trait: synchronous interface over 32-byte keys and words.
///
/// Commands run to completion without yielding, so every method blocks until
/// the backend answers.
pub trait Store: Send + Sync {
    /// Read the word stored under `key`, or `None` if it was never written.
    fn get(&self, key: &StorageKey) -> Result<Option<StorageValue>>;

    /// Write a single word.
    fn set(&self, key: &StorageKey, value: StorageValue) -> Result<()>;

    /// Write every entry or none of them. Later entries win on duplicate keys.
    fn apply_batch(&self, writes: &[(StorageKey, StorageValue)]) -> Result<()>;

    /// Read a word, treating absence as zero.
    fn get_or_zero(&self, key: &StorageKey) -> Result<StorageValue> {
        Ok(self.get(key)?.unwrap_or(StorageValue::ZERO))
    }
}

impl<S: Store + ?Sized> Store for &S {
    fn get(&self, key: &StorageKey) -> Result<Option<StorageValue>> {
        (**self).get(key)
    }

    fn set(&self, key: &StorageKey, value: StorageValue) -> Result<()> {
        (**self).set(key, value)
    }

    fn apply_batch(&self, writes: &[(StorageKey, StorageValue)]) -> Result<()> {
        (**self).apply_batch(writes)
    }
}

impl<S: Store + ?Sized> Store for std::sync::Arc<S> {
    fn get(&self, key: &StorageKey) -> Result<Option<StorageValue>> {
        (**self).get(key)
    }

    fn set(&self, key: &StorageKey, value: StorageValue) -> Result<()> {
        (**self).set(key, value)
    }

    fn apply_batch(&self, writes: &[(StorageKey, StorageValue)]) -> Result<()> {
        (**self).apply_batch(writes)
    }
}
