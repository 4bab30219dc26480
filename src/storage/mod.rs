// storage/mod.rs
// Persisted state: SQLite pool, schema, key/value records

pub mod kv;
pub mod migrations;
pub mod pool;
#[cfg(test)]
pub(crate) mod test_helpers;

// Re-export commonly used items
pub use kv::KeyValueStore;
pub use migrations::run_migrations;
pub use pool::{init_db_pool_with_path, init_memory_pool};
