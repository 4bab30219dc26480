//! Key/value persistence on top of SQLite.
//!
//! Errors are returned to the caller; the log and session layers decide how to
//! degrade (they always do, to empty or no-op).

use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::error_handling::StorageError;

/// Handle to the persisted key/value records.
///
/// Cheap to clone; clones share the same pool.
#[derive(Debug, Clone)]
pub struct KeyValueStore {
    pool: Pool<Sqlite>,
}

impl KeyValueStore {
    /// Wraps a pool whose schema has already been migrated.
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Reads the raw value stored under `key`.
    pub async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value: Option<String> = sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    /// Replaces the value stored under `key`.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().timestamp_millis())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}
