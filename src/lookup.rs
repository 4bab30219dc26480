//! Single-server lookup: resolve, estimate, record.

use chrono::Utc;
use log::info;

use crate::error_handling::LookupError;
use crate::lookup_log::LogEntry;
use crate::region::{estimate, LatencyEstimate};
use crate::resolver::{RegionResolverClient, ResolvedServerInfo};
use crate::session::Session;

/// Result of a successful single lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOutcome {
    pub info: ResolvedServerInfo,
    pub latency: LatencyEstimate,
}

impl LookupOutcome {
    pub fn country_region(&self) -> String {
        self.info.country_region()
    }
}

/// Resolves `job_id`, estimates latency from the session's client region and
/// appends the result to the session log.
///
/// Nothing is logged on failure.
pub async fn fetch_region(
    session: &Session,
    resolver: &RegionResolverClient,
    job_id: &str,
) -> Result<LookupOutcome, LookupError> {
    let info = resolver.resolve(job_id).await?;
    let latency = estimate(session.client_region(), info.region_code.as_deref());
    info!("Server {} is in {} ({latency})", info.job_id, info.region_name);

    session
        .log()
        .append(LogEntry {
            timestamp: Utc::now().timestamp_millis(),
            job_id: info.job_id.clone(),
            region_name: info.region_name.clone(),
            country_region: info.country_region(),
            subregion: info.subregion.clone(),
            ping_text: latency.to_string(),
        })
        .await;

    Ok(LookupOutcome { info, latency })
}
