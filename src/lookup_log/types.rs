//! Recent lookup log data structures.

use serde::{Deserialize, Serialize};

/// One successful single-server lookup, as persisted.
///
/// Field names follow the stored JSON layout (`jobId`, `regionName`, ...).
/// Missing fields load as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogEntry {
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub job_id: String,
    pub region_name: String,
    /// `continent - country`, or just `country` when the continent is unknown
    pub country_region: String,
    pub subregion: String,
    /// Latency display text, e.g. `~110 ms`
    pub ping_text: String,
}

/// An entry prepared for display, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogView {
    pub entry: LogEntry,
    /// Set on the most recent entry only.
    pub last_searched: bool,
}
