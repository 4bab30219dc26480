//! Shared test helpers for storage-backed module tests.

#[cfg(test)]
use crate::storage::{init_memory_pool, run_migrations, KeyValueStore};

/// Creates an in-memory store with the schema applied.
#[cfg(test)]
pub async fn create_test_store() -> KeyValueStore {
    let pool = init_memory_pool()
        .await
        .expect("Failed to create test database pool");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    KeyValueStore::new(pool)
}
