//! Aggregation data structures.

use crate::error_handling::{LookupError, LookupStats};
use crate::region::LatencyEstimate;
use crate::resolver::ResolvedServerInfo;

/// A server identifier found in a listing, not resolved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateServerRecord {
    pub job_id: String,
    /// Ping the listing itself reported for this server, if any
    pub reported_ping_ms: Option<u32>,
}

impl CandidateServerRecord {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            reported_ping_ms: None,
        }
    }

    pub fn with_hint(job_id: impl Into<String>, reported_ping_ms: u32) -> Self {
        Self {
            job_id: job_id.into(),
            reported_ping_ms: Some(reported_ping_ms),
        }
    }
}

/// A resolved server with its estimated latency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSlot {
    pub info: ResolvedServerInfo,
    pub latency: LatencyEstimate,
}

/// One position of an aggregation result.
#[derive(Debug)]
pub struct AggregatedSlot {
    pub candidate: CandidateServerRecord,
    pub result: Result<ResolvedSlot, LookupError>,
}

/// Slots of one aggregation call plus failure counters.
#[derive(Debug)]
pub struct BatchReport {
    pub slots: Vec<AggregatedSlot>,
    pub stats: LookupStats,
}

impl BatchReport {
    pub fn from_slots(slots: Vec<AggregatedSlot>) -> Self {
        let mut stats = LookupStats::new();
        for slot in &slots {
            if let Err(e) = &slot.result {
                stats.record(e);
            }
        }
        Self { slots, stats }
    }

    pub fn total(&self) -> usize {
        self.slots.len()
    }

    pub fn succeeded(&self) -> usize {
        self.slots.iter().filter(|s| s.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.stats.total()
    }
}
