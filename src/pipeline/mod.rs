//! Multi-server aggregation.
//!
//! Candidates are deduplicated, capped at `MAX_BATCH_SIZE`, and resolved all at
//! once. The lookups are polled together on the calling task, so they interleave
//! while waiting on the network but never run in parallel. Every lookup settles
//! on its own: one failure does not cancel or affect the others, and the output
//! keeps the input order regardless of completion order.

mod dedup;
mod discovery;
mod types;

pub use dedup::dedupe_and_cap;
pub use discovery::{
    discover_candidates, parse_candidate_line, CandidateSource, StaticCandidateSource,
};
pub use types::{AggregatedSlot, BatchReport, CandidateServerRecord, ResolvedSlot};

use futures::future::join_all;
use log::{debug, info};

use crate::config::MAX_BATCH_SIZE;
use crate::region::estimate;
use crate::resolver::RegionResolverClient;

/// Resolves every distinct candidate (up to the batch cap) and estimates
/// latency from `client_region` for each success.
///
/// `result[i]` corresponds to the i-th surviving candidate.
pub async fn aggregate(
    resolver: &RegionResolverClient,
    candidates: &[CandidateServerRecord],
    client_region: Option<&str>,
) -> Vec<AggregatedSlot> {
    let batch = dedupe_and_cap(candidates, MAX_BATCH_SIZE);
    if batch.len() < candidates.len() {
        debug!(
            "Reduced {} candidate(s) to {} after dedupe and cap",
            candidates.len(),
            batch.len()
        );
    }
    info!("Resolving {} server(s)", batch.len());

    let results = join_all(batch.iter().map(|c| resolver.resolve(&c.job_id))).await;

    batch
        .into_iter()
        .zip(results)
        .map(|(candidate, result)| AggregatedSlot {
            candidate,
            result: result.map(|info| {
                let latency = estimate(client_region, info.region_code.as_deref());
                ResolvedSlot { info, latency }
            }),
        })
        .collect()
}

/// `aggregate` plus failure counters.
pub async fn aggregate_report(
    resolver: &RegionResolverClient,
    candidates: &[CandidateServerRecord],
    client_region: Option<&str>,
) -> BatchReport {
    let report = BatchReport::from_slots(aggregate(resolver, candidates, client_region).await);
    info!(
        "Batch finished: {} resolved, {} failed",
        report.succeeded(),
        report.failed()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::LookupErrorKind;
    use crate::region::{LatencyEstimate, UnknownReason};
    use std::sync::Arc;
    use std::time::Duration;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn resolver_for(server: &MockServer) -> RegionResolverClient {
        RegionResolverClient::new(Arc::new(reqwest::Client::new()), &server.uri())
            .expect("mock server uri should parse")
    }

    async fn mount_region(server: &MockServer, job_id: &str, region_code: &str) {
        Mock::given(method("GET"))
            .and(query_param("jobId", job_id))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "regionCode": region_code })),
            )
            .mount(server)
            .await;
    }

    fn slot_ids(slots: &[AggregatedSlot]) -> Vec<&str> {
        slots.iter().map(|s| s.candidate.job_id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_duplicates_resolve_once_in_order() {
        let server = MockServer::start().await;
        mount_region(&server, "A", "us-east").await;
        mount_region(&server, "B", "eu-west").await;
        mount_region(&server, "C", "asia-east").await;

        let candidates = vec![
            CandidateServerRecord::with_hint("A", 45),
            CandidateServerRecord::new("B"),
            CandidateServerRecord::with_hint("A", 300),
            CandidateServerRecord::new("C"),
        ];
        let slots = aggregate(&resolver_for(&server), &candidates, Some("us-east")).await;

        assert_eq!(slot_ids(&slots), vec!["A", "B", "C"]);
        assert_eq!(slots[0].candidate.reported_ping_ms, Some(45));
        let latencies: Vec<Option<u32>> = slots
            .iter()
            .map(|s| s.result.as_ref().ok().and_then(|r| r.latency.millis()))
            .collect();
        assert_eq!(latencies, vec![Some(30), Some(110), Some(190)]);

        let requests = server.received_requests().await.expect("recording enabled");
        assert_eq!(requests.len(), 3);
    }

    #[tokio::test]
    async fn test_batch_is_capped_at_32() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "regionCode": "eu-west" })),
            )
            .mount(&server)
            .await;

        let candidates: Vec<CandidateServerRecord> = (0..40)
            .map(|n| CandidateServerRecord::new(format!("job-{n:02}")))
            .collect();
        let slots = aggregate(&resolver_for(&server), &candidates, None).await;

        assert_eq!(slots.len(), 32);
        assert_eq!(slots[0].candidate.job_id, "job-00");
        assert_eq!(slots[31].candidate.job_id, "job-31");
        let requests = server.received_requests().await.expect("recording enabled");
        assert_eq!(requests.len(), 32);
        // No client region selected
        let first = slots[0].result.as_ref().expect("resolved");
        assert_eq!(
            first.latency,
            LatencyEstimate::Unknown(UnknownReason::NoClientRegion)
        );
    }

    #[tokio::test]
    async fn test_one_failure_does_not_affect_siblings() {
        let server = MockServer::start().await;
        mount_region(&server, "ok-1", "eu-west").await;
        Mock::given(method("GET"))
            .and(query_param("jobId", "broken"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        mount_region(&server, "ok-2", "eu-central").await;

        let candidates = vec![
            CandidateServerRecord::new("ok-1"),
            CandidateServerRecord::new("broken"),
            CandidateServerRecord::new("ok-2"),
        ];
        let report =
            aggregate_report(&resolver_for(&server), &candidates, Some("eu-west")).await;

        assert_eq!(slot_ids(&report.slots), vec!["ok-1", "broken", "ok-2"]);
        assert!(report.slots[0].result.is_ok());
        assert!(report.slots[2].result.is_ok());
        let err = report.slots[1].result.as_ref().expect_err("slot 1 fails");
        assert_eq!(err.kind(), LookupErrorKind::HttpStatus);

        assert_eq!(report.total(), 3);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.stats.get_count(LookupErrorKind::HttpStatus), 1);
    }

    #[tokio::test]
    async fn test_output_follows_input_not_completion_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("jobId", "slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "regionCode": "asia-south" }))
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&server)
            .await;
        mount_region(&server, "fast", "us-west").await;

        let candidates = vec![
            CandidateServerRecord::new("slow"),
            CandidateServerRecord::new("fast"),
        ];
        let slots = aggregate(&resolver_for(&server), &candidates, Some("us-west")).await;

        assert_eq!(slot_ids(&slots), vec!["slow", "fast"]);
        let slow = slots[0].result.as_ref().expect("slow resolves");
        assert_eq!(slow.info.region_code.as_deref(), Some("asia-south"));
        assert_eq!(slow.latency, LatencyEstimate::Millis(190));
    }

    #[tokio::test]
    async fn test_blank_candidate_fails_in_its_slot() {
        let server = MockServer::start().await;
        mount_region(&server, "job-1", "us-east").await;

        let candidates = vec![CandidateServerRecord::new(" "), CandidateServerRecord::new("job-1")];
        let slots = aggregate(&resolver_for(&server), &candidates, Some("us-east")).await;

        assert_eq!(slots.len(), 2);
        let err = slots[0].result.as_ref().expect_err("blank id fails");
        assert_eq!(err.kind(), LookupErrorKind::Input);
        assert!(slots[1].result.is_ok());
    }
}
