// storage/migrations.rs
// Schema setup

use sqlx::{Pool, Sqlite};

use crate::error_handling::StorageError;

/// Creates the key/value table if it does not exist yet. Safe to run on every start.
pub async fn run_migrations(pool: &Pool<Sqlite>) -> Result<(), StorageError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            updated_at INTEGER NOT NULL
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}
