//! # Leaderboard Store
//!
//! Durable key-value storage for the leaderboard. The contract only ever sees
//! the [`Store`] trait, so it can run against SQLite in production and an
//! in-memory map in tests.
//!
//! ## Key Types
//!
//! - [`Store`] - Synchronous get/set/apply-batch interface over 32-byte words
//! - [`SqliteStore`] - SQLite-based persistent storage
//! - [`MemoryStore`] - In-memory storage for tests
//! - [`Overlay`] - Per-command write buffer layered over another store
//!
//! ## Usage
//!
//! ```rust,no_run
//! use leaderboard_core::{Slot, StorageKey, StorageValue, Score};
//! use leaderboard_store::{SqliteStore, Store};
//!
//! let store = SqliteStore::open("leaderboard.db").unwrap();
//! let key = StorageKey::singleton(Slot::TOP_SCORE);
//! store.set(&key, StorageValue::from_u256(Score::from(10u64))).unwrap();
//! assert_eq!(store.get(&key).unwrap().map(|v| v.to_u256()), Some(Score::from(10u64)));
//! ```
//!
//! ## Design Notes
//!
//! - **Absent reads**: `get` returns `None` for keys never written. Callers
//!   treat that the same as a stored zero.
//! - **Atomic batches**: `apply_batch` writes all entries or none.
//! - **No caching**: every read reflects the latest committed write.

pub mod error;
pub mod memory;
pub mod migration;
pub mod overlay;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use overlay::Overlay;
pub use sqlite::SqliteStore;
pub use traits::Store;
