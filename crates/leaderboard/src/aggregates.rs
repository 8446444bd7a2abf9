//! Typed access to the three persisted aggregates.
//!
//! | Aggregate | Slot | Key |
//! |---|---|---|
//! | per-player best score | 1 | player identity bytes |
//! | top score | 2 | singleton |
//! | total players | 3 | singleton |
//!
//! Each call resolves its key and goes straight to the store. Nothing is cached.

use leaderboard_core::{Identity, Score, Slot, StorageKey, StorageValue, U256};
use leaderboard_store::Store;

use crate::error::Result;

/// Read/write view of the aggregates over a store.
pub struct Aggregates<'s, S: Store + ?Sized> {
    store: &'s S,
}

impl<'s, S: Store + ?Sized> Aggregates<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    fn read(&self, key: &StorageKey) -> Result<U256> {
        Ok(self.store.get_or_zero(key)?.to_u256())
    }

    fn write(&self, key: &StorageKey, value: U256) -> Result<()> {
        Ok(self.store.set(key, StorageValue::from_u256(value))?)
    }

    /// A player's best score; zero if they never submitted.
    pub fn read_score(&self, player: &Identity) -> Result<Score> {
        self.read(&StorageKey::for_identity(Slot::PLAYER_SCORE, player))
    }

    pub fn write_score(&self, player: &Identity, score: Score) -> Result<()> {
        self.write(&StorageKey::for_identity(Slot::PLAYER_SCORE, player), score)
    }

    pub fn read_top(&self) -> Result<Score> {
        self.read(&StorageKey::singleton(Slot::TOP_SCORE))
    }

    pub fn write_top(&self, score: Score) -> Result<()> {
        self.write(&StorageKey::singleton(Slot::TOP_SCORE), score)
    }

    pub fn read_count(&self) -> Result<U256> {
        self.read(&StorageKey::singleton(Slot::TOTAL_PLAYERS))
    }

    pub fn write_count(&self, count: U256) -> Result<()> {
        self.write(&StorageKey::singleton(Slot::TOTAL_PLAYERS), count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leaderboard_store::MemoryStore;

    #[test]
    fn test_absent_reads_are_zero() {
        let store = MemoryStore::new();
        let aggregates = Aggregates::new(&store);

        assert!(aggregates.read_score(&Identity::from_bytes([1; 32])).unwrap().is_zero());
        assert!(aggregates.read_top().unwrap().is_zero());
        assert!(aggregates.read_count().unwrap().is_zero());
    }

    #[test]
    fn test_aggregates_are_independent() {
        let store = MemoryStore::new();
        let aggregates = Aggregates::new(&store);
        let alice = Identity::from_bytes([0xa1; 32]);
        let bob = Identity::from_bytes([0xb0; 32]);

        aggregates.write_score(&alice, Score::from(10u64)).unwrap();
        aggregates.write_top(Score::from(20u64)).unwrap();
        aggregates.write_count(U256::from(3u64)).unwrap();

        assert_eq!(aggregates.read_score(&alice).unwrap(), Score::from(10u64));
        assert!(aggregates.read_score(&bob).unwrap().is_zero());
        assert_eq!(aggregates.read_top().unwrap(), Score::from(20u64));
        assert_eq!(aggregates.read_count().unwrap(), U256::from(3u64));
        assert_eq!(store.len().unwrap(), 3);
    }
}
