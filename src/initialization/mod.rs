//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - HTTP client and resolver
//! - Persisted key/value store
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

use std::path::Path;

use log::warn;

use crate::config::Config;
use crate::error_handling::{InitializationError, StorageError};
use crate::resolver::RegionResolverClient;
use crate::storage::{init_db_pool_with_path, init_memory_pool, run_migrations, KeyValueStore};

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Builds the resolver client from the config.
///
/// # Errors
///
/// Fails if the HTTP client cannot be built or the resolver URL is invalid.
pub fn init_resolver(config: &Config) -> Result<RegionResolverClient, InitializationError> {
    let client = init_client(config)?;
    RegionResolverClient::new(client, &config.resolver_url)
}

/// Opens the persisted store at `db_path` with its schema applied.
///
/// # Errors
///
/// Returns `StorageError` if the database cannot be opened or migrated.
pub async fn init_store(db_path: &Path) -> Result<KeyValueStore, StorageError> {
    let pool = init_db_pool_with_path(db_path).await?;
    run_migrations(&pool).await?;
    Ok(KeyValueStore::new(pool))
}

/// Opens the store at `db_path`, falling back to an in-memory store.
///
/// Persisted state is best effort: when the file cannot be used the run still
/// works, it just does not remember anything afterwards.
pub async fn init_store_or_memory(db_path: &Path) -> Result<KeyValueStore, StorageError> {
    match init_store(db_path).await {
        Ok(store) => Ok(store),
        Err(e) => {
            warn!(
                "Persisted state unavailable at {}: {e}. Continuing without it.",
                db_path.display()
            );
            let pool = init_memory_pool().await?;
            run_migrations(&pool).await?;
            Ok(KeyValueStore::new(pool))
        }
    }
}
