//! Region classification and latency estimation.
//!
//! Region codes look like `us-east` or `asia-southeast`. Only the prefix matters
//! for the latency table; the full code matters for the same-region case.

mod catalog;
mod classify;
mod latency;

// Re-export public API
pub use catalog::{find_client_region, is_client_region, ClientRegion, CLIENT_REGIONS};
pub use classify::{classify, MacroRegion};
pub use latency::{estimate, pair_key, LatencyEstimate, UnknownReason};
