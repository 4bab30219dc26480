//! Configuration constants.
//!
//! Fixed operational parameters: the resolver endpoint, batch ceiling, log
//! capacity, persisted keys, and the latency table values.

use std::time::Duration;

/// Default resolver endpoint. The job id is passed as the `jobId` query parameter.
pub const DEFAULT_RESOLVER_URL: &str = "https://roblox-region-worker.mishka-bilyi.workers.dev/";

/// Query parameter carrying the server identifier.
pub const RESOLVER_QUERY_PARAM: &str = "jobId";

/// Default database path (SQLite file) for persisted state.
pub const DB_PATH: &str = "./region_finder.db";

/// Default User-Agent string for resolver requests.
pub const DEFAULT_USER_AGENT: &str = concat!("region_finder/", env!("CARGO_PKG_VERSION"));

// Aggregation
/// Maximum number of candidates resolved per aggregation call.
/// Bounds the fan-out; there is no other throttling.
pub const MAX_BATCH_SIZE: usize = 32;

// Candidate discovery
/// How many times discovery asks the listing for more candidates.
pub const PAGINATION_ATTEMPTS: usize = 3;
/// Delay between a "load more" request and the next re-scan.
pub const PAGINATION_SETTLE_DELAY: Duration = Duration::from_millis(750);

// Recent lookup log
/// Number of entries the recent lookup log keeps.
pub const LOG_CAPACITY: usize = 3;

// Persisted keys
/// Key of the JSON-encoded recent lookup log.
pub const LOG_STORAGE_KEY: &str = "rbx_region_log";
/// Key of the saved client region code.
pub const DEVICE_REGION_KEY: &str = "rbx_device_region";

// Latency table (milliseconds)
/// Client and server share the exact region code.
pub const SAME_REGION_MS: u32 = 30;
/// Different region codes on the same continent.
pub const SAME_CONTINENT_MS: u32 = 60;
/// Europe to North America.
pub const EU_NA_MS: u32 = 110;
/// Asia to Europe.
pub const AS_EU_MS: u32 = 170;
/// Asia to North America.
pub const AS_NA_MS: u32 = 190;
/// Any pair where one side could not be classified.
pub const DEFAULT_CROSS_REGION_MS: u32 = 150;

// Join links
/// URI scheme of the game client launcher.
pub const JOIN_URI_SCHEME: &str = "roblox";

/// Placeholder shown for any field the resolver did not provide.
pub const UNKNOWN: &str = "Unknown";
