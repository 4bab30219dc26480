//! Candidate deduplication and batch capping.

use std::collections::HashSet;

use super::types::CandidateServerRecord;

/// Drops repeated identifiers (first occurrence wins, including its hint) and
/// keeps at most `cap` candidates, in discovery order.
///
/// Identifiers are compared trimmed, as the resolver sees them.
pub fn dedupe_and_cap(candidates: &[CandidateServerRecord], cap: usize) -> Vec<CandidateServerRecord> {
    let mut seen: HashSet<&str> = HashSet::new();
    candidates
        .iter()
        .filter(|candidate| seen.insert(candidate.job_id.trim()))
        .take(cap)
        .cloned()
        .collect()
}
