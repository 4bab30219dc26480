//! Candidate discovery.
//!
//! A listing is consumed through `CandidateSource`: scan what is visible, ask
//! for more, wait for the listing to settle, scan again.

use std::future::Future;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

use super::types::CandidateServerRecord;

/// A listing of candidate servers.
pub trait CandidateSource {
    /// Returns every candidate currently visible, in listing order.
    fn scan(&mut self) -> impl Future<Output = Result<Vec<CandidateServerRecord>>> + Send;

    /// Asks the listing to load more entries. Returns `false` when there is nothing more.
    fn request_more(&mut self) -> impl Future<Output = Result<bool>> + Send;
}

/// Scans `source`, paginating up to `attempts` times with `settle_delay`
/// between each request and the following re-scan.
pub async fn discover_candidates<S: CandidateSource>(
    source: &mut S,
    attempts: usize,
    settle_delay: Duration,
) -> Result<Vec<CandidateServerRecord>> {
    let mut candidates = source.scan().await?;
    for attempt in 1..=attempts {
        if !source.request_more().await? {
            debug!("Listing exhausted after {} pagination attempt(s)", attempt - 1);
            break;
        }
        tokio::time::sleep(settle_delay).await;
        candidates = source.scan().await?;
        debug!(
            "Pagination attempt {attempt}: {} candidate(s) visible",
            candidates.len()
        );
    }
    info!("Discovered {} candidate(s)", candidates.len());
    Ok(candidates)
}

/// A fixed list of candidates with no further pages.
#[derive(Debug, Clone, Default)]
pub struct StaticCandidateSource {
    candidates: Vec<CandidateServerRecord>,
}

impl StaticCandidateSource {
    pub fn new(candidates: Vec<CandidateServerRecord>) -> Self {
        Self { candidates }
    }

    /// Reads candidates from a file, or from stdin when `path` is `-`.
    pub async fn from_path(path: &Path) -> Result<Self> {
        let candidates = if path.as_os_str() == "-" {
            info!("Reading candidates from stdin");
            read_candidates(tokio::io::stdin()).await?
        } else {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open candidates file {}", path.display()))?;
            read_candidates(file).await?
        };
        Ok(Self::new(candidates))
    }
}

impl CandidateSource for StaticCandidateSource {
    async fn scan(&mut self) -> Result<Vec<CandidateServerRecord>> {
        Ok(self.candidates.clone())
    }

    async fn request_more(&mut self) -> Result<bool> {
        Ok(false)
    }
}

/// Reads one candidate per line.
async fn read_candidates<R: AsyncRead + Unpin>(reader: R) -> Result<Vec<CandidateServerRecord>> {
    let mut lines = BufReader::new(reader).lines();
    let mut candidates = Vec::new();
    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read candidate line")?
    {
        if let Some(candidate) = parse_candidate_line(&line) {
            candidates.push(candidate);
        }
    }
    Ok(candidates)
}

/// Parses `<jobId>[,<ping ms>]`. Blank lines and `#` comments yield `None`.
///
/// An unparseable ping hint is dropped; the identifier is kept.
pub fn parse_candidate_line(line: &str) -> Option<CandidateServerRecord> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (job_id, hint) = match line.split_once(',') {
        Some((job_id, hint)) => (job_id.trim(), Some(hint.trim())),
        None => (line, None),
    };
    if job_id.is_empty() {
        return None;
    }

    let reported_ping_ms = hint.filter(|h| !h.is_empty()).and_then(|h| {
        let parsed = h.trim_end_matches("ms").trim().parse::<u32>().ok();
        if parsed.is_none() {
            debug!("Ignoring unreadable ping hint {h:?} for {job_id}");
        }
        parsed
    });

    Some(CandidateServerRecord {
        job_id: job_id.to_string(),
        reported_ping_ms,
    })
}
