//! Overlay: a read-through write buffer over another store.
//!
//! Each command runs against an overlay. Reads see the command's own pending
//! writes first and fall through to the base store otherwise. Nothing reaches
//! the base store until the host commits the batch, so a command that fails
//! halfway leaves no trace.

use std::collections::HashMap;
use std::sync::RwLock;

use leaderboard_core::{StorageKey, StorageValue};

use crate::error::Result;
use crate::traits::Store;

struct Pending {
    /// Latest pending value per key.
    values: HashMap<StorageKey, StorageValue>,
    /// Keys in first-write order, for a deterministic batch.
    order: Vec<StorageKey>,
}

/// A write buffer layered over a base store.
pub struct Overlay<'a, S: Store + ?Sized> {
    base: &'a S,
    pending: RwLock<Pending>,
}

impl<'a, S: Store + ?Sized> Overlay<'a, S> {
    pub fn new(base: &'a S) -> Self {
        Self {
            base,
            pending: RwLock::new(Pending {
                values: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }

    /// Consume the overlay and return its writes, one per key, in first-write order.
    pub fn into_writes(self) -> Result<Vec<(StorageKey, StorageValue)>> {
        let pending = self.pending.into_inner()?;
        Ok(pending
            .order
            .iter()
            .filter_map(|key| pending.values.get(key).map(|value| (*key, *value)))
            .collect())
    }

    /// Apply the buffered writes to the base store in one atomic batch.
    pub fn commit(self) -> Result<usize> {
        let base = self.base;
        let writes = self.into_writes()?;
        if !writes.is_empty() {
            base.apply_batch(&writes)?;
        }
        Ok(writes.len())
    }
}

impl<'a, S: Store + ?Sized> Store for Overlay<'a, S> {
    fn get(&self, key: &StorageKey) -> Result<Option<StorageValue>> {
        if let Some(value) = self.pending.read()?.values.get(key) {
            return Ok(Some(*value));
        }
        self.base.get(key)
    }

    fn set(&self, key: &StorageKey, value: StorageValue) -> Result<()> {
        let mut pending = self.pending.write()?;
        if pending.values.insert(*key, value).is_none() {
            pending.order.push(*key);
        }
        Ok(())
    }

    fn apply_batch(&self, writes: &[(StorageKey, StorageValue)]) -> Result<()> {
        for (key, value) in writes {
            self.set(key, *value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use leaderboard_core::{Score, Slot};

    #[test]
    fn test_overlay_reads_through() {
        let base = MemoryStore::new();
        let key = StorageKey::singleton(Slot::TOP_SCORE);
        base.set(&key, Score::from(5u64).into()).unwrap();

        let overlay = Overlay::new(&base);
        assert_eq!(overlay.get_or_zero(&key).unwrap().to_u256(), Score::from(5u64));
    }

    #[test]
    fn test_overlay_isolates_until_commit() {
        let base = MemoryStore::new();
        let key = StorageKey::singleton(Slot::TOP_SCORE);

        let overlay = Overlay::new(&base);
        overlay.set(&key, Score::from(7u64).into()).unwrap();

        assert_eq!(overlay.get_or_zero(&key).unwrap().to_u256(), Score::from(7u64));
        assert_eq!(base.get(&key).unwrap(), None);

        assert_eq!(overlay.commit().unwrap(), 1);
        assert_eq!(base.get_or_zero(&key).unwrap().to_u256(), Score::from(7u64));
    }

    #[test]
    fn test_dropped_overlay_leaves_base_untouched() {
        let base = MemoryStore::new();
        {
            let overlay = Overlay::new(&base);
            overlay
                .set(&StorageKey::singleton(Slot::TOTAL_PLAYERS), Score::one().into())
                .unwrap();
        }
        assert!(base.is_empty().unwrap());
    }

    #[test]
    fn test_into_writes_dedups_in_first_write_order() {
        let base = MemoryStore::new();
        let a = StorageKey::singleton(Slot::TOP_SCORE);
        let b = StorageKey::singleton(Slot::TOTAL_PLAYERS);

        let overlay = Overlay::new(&base);
        overlay.set(&a, Score::from(1u64).into()).unwrap();
        overlay.set(&b, Score::from(2u64).into()).unwrap();
        overlay.set(&a, Score::from(3u64).into()).unwrap();

        let writes = overlay.into_writes().unwrap();
        assert_eq!(
            writes,
            vec![
                (a, StorageValue::from_u256(Score::from(3u64))),
                (b, StorageValue::from_u256(Score::from(2u64))),
            ]
        );
    }
}
