//! region_finder library: game server region lookup and latency estimation
//!
//! Resolves opaque server identifiers (job ids) to geographic regions through a
//! remote resolver, estimates the round-trip latency from a chosen client region
//! with a fixed table, resolves whole server listings in one batch, and keeps a
//! small persisted log of recent lookups.
//!
//! # Example
//!
//! ```no_run
//! use region_finder::{Config, RegionFinder};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     client_region: Some("eu-west".to_string()),
//!     ..Default::default()
//! };
//!
//! let finder = RegionFinder::init(&config).await?;
//! let outcome = finder.lookup("6f1c0a4e-0000-4000-8000-000000000000").await?;
//! println!("{} ({})", outcome.info.region_name, outcome.latency);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Lookups in a batch are polled on the
//! calling task, so a current-thread runtime is enough.

pub mod app;
pub mod config;
mod error_handling;
pub mod initialization;
mod join;
mod lookup;
mod lookup_log;
pub mod pipeline;
mod region;
mod resolver;
mod run;
mod session;
mod storage;

// Re-export public API
pub use config::{Command, Config, LogFormat, LogLevel, Opt};
pub use error_handling::{
    InitializationError, InputError, LookupError, LookupErrorKind, LookupStats, StorageError,
};
pub use join::join_uri;
pub use lookup::{fetch_region, LookupOutcome};
pub use lookup_log::{LogEntry, LogView, RecentLookupLog};
pub use pipeline::{
    aggregate, aggregate_report, AggregatedSlot, BatchReport, CandidateServerRecord,
    ResolvedSlot,
};
pub use region::{
    classify, estimate, find_client_region, is_client_region, pair_key, ClientRegion,
    LatencyEstimate, MacroRegion, UnknownReason, CLIENT_REGIONS,
};
pub use resolver::{RegionResolverClient, ResolvedServerInfo};
pub use run::RegionFinder;
pub use session::Session;
pub use storage::{init_db_pool_with_path, init_memory_pool, run_migrations, KeyValueStore};
