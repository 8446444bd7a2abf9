//! SQLite implementation of the Store trait.
//!
//! This is the primary storage backend for the leaderboard. It uses
//! rusqlite with bundled SQLite behind a mutex; every batch is written in
//! a single SQLite transaction.

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::{params, Connection, OptionalExtension};

use leaderboard_core::{StorageKey, StorageValue, WORD_LEN};

use crate::error::{Result, StoreError};
use crate::migration;
use crate::traits::Store;

/// SQLite-based store implementation.
///
/// Thread-safe via internal Mutex.
pub struct SqliteStore {
    /// The SQLite connection, protected by a mutex.
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        tracing::debug!(path = %path.display(), "opened sqlite store");
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Execute a blocking operation on the connection.
    fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock()?;
        f(&conn)
    }

    /// Execute a blocking operation that needs mutable access.
    fn with_conn_mut<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        let mut conn = self.conn.lock()?;
        f(&mut conn)
    }
}

// Helper to convert a stored blob to a word
fn blob_to_value(blob: Vec<u8>) -> Result<StorageValue> {
    let len = blob.len();
    let bytes: [u8; WORD_LEN] = blob.try_into().map_err(|_| {
        StoreError::InvalidData(format!("stored word has {} bytes, expected {}", len, WORD_LEN))
    })?;
    Ok(StorageValue::from_bytes(bytes))
}

const UPSERT_SQL: &str = "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

impl Store for SqliteStore {
    fn get(&self, key: &StorageKey) -> Result<Option<StorageValue>> {
        self.with_conn(|conn| {
            let blob: Option<Vec<u8>> = conn
                .query_row(
                    "SELECT value FROM kv WHERE key = ?1",
                    params![key.as_bytes().as_slice()],
                    |row| row.get(0),
                )
                .optional()?;
            blob.map(blob_to_value).transpose()
        })
    }

    fn set(&self, key: &StorageKey, value: StorageValue) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                UPSERT_SQL,
                params![
                    key.as_bytes().as_slice(),
                    value.as_bytes().as_slice(),
                    now_millis()
                ],
            )?;
            Ok(())
        })
    }

    fn apply_batch(&self, writes: &[(StorageKey, StorageValue)]) -> Result<()> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            {
                let mut stmt = tx.prepare_cached(UPSERT_SQL)?;
                let now = now_millis();
                for (key, value) in writes {
                    stmt.execute(params![
                        key.as_bytes().as_slice(),
                        value.as_bytes().as_slice(),
                        now
                    ])?;
                }
            }
            tx.commit()?;
            Ok(())
        })
    }
}

/// Get current time in milliseconds.
fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
