//! Bounded, persisted log of the most recent lookups.
//!
//! The log is a JSON array stored under a single key. It is read from storage on
//! every `load` and rewritten in full on every `append`. Storage problems never
//! reach the caller: a missing or corrupt record reads as empty, and a failed
//! write leaves the previous state in place.

mod types;

pub use types::{LogEntry, LogView};

use log::{debug, warn};

use crate::config::{LOG_CAPACITY, LOG_STORAGE_KEY};
use crate::error_handling::StorageError;
use crate::storage::KeyValueStore;

/// FIFO of the last `LOG_CAPACITY` lookups.
#[derive(Debug, Clone)]
pub struct RecentLookupLog {
    store: KeyValueStore,
}

impl RecentLookupLog {
    pub fn new(store: KeyValueStore) -> Self {
        Self { store }
    }

    /// Returns persisted entries in insertion order (oldest first).
    pub async fn load(&self) -> Vec<LogEntry> {
        match self.try_load().await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Ignoring unreadable lookup log: {e}");
                Vec::new()
            }
        }
    }

    async fn try_load(&self) -> Result<Vec<LogEntry>, StorageError> {
        let Some(raw) = self.store.get(LOG_STORAGE_KEY).await? else {
            return Ok(Vec::new());
        };
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        let items: Vec<serde_json::Value> = serde_json::from_str(&raw)?;
        let total = items.len();
        let entries: Vec<LogEntry> = items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect();
        if entries.len() < total {
            warn!(
                "Skipped {} unreadable lookup log entries",
                total - entries.len()
            );
        }
        Ok(entries)
    }

    /// Appends `entry`, evicting the oldest entries beyond capacity, and persists.
    pub async fn append(&self, entry: LogEntry) {
        let mut entries = self.load().await;
        entries.push(entry);
        if entries.len() > LOG_CAPACITY {
            let excess = entries.len() - LOG_CAPACITY;
            entries.drain(..excess);
        }

        if let Err(e) = self.save(&entries).await {
            warn!("Failed to persist lookup log: {e}");
            return;
        }
        debug!("Lookup log now holds {} entries", entries.len());
    }

    async fn save(&self, entries: &[LogEntry]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(entries)?;
        self.store.set(LOG_STORAGE_KEY, &raw).await
    }

    /// Entries newest first; the newest is tagged as the last searched server.
    pub async fn render_view(&self) -> Vec<LogView> {
        self.load()
            .await
            .into_iter()
            .rev()
            .enumerate()
            .map(|(idx, entry)| LogView {
                entry,
                last_searched: idx == 0,
            })
            .collect()
    }
}
