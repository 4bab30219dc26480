//! Orchestration: wires config, store, session and resolver together.

use anyhow::{Context, Result};
use log::debug;

use crate::config::{Config, PAGINATION_ATTEMPTS, PAGINATION_SETTLE_DELAY};
use crate::error_handling::{InputError, LookupError};
use crate::initialization::{init_resolver, init_store_or_memory};
use crate::lookup::{fetch_region, LookupOutcome};
use crate::lookup_log::LogView;
use crate::pipeline::{aggregate_report, discover_candidates, BatchReport, CandidateSource};
use crate::resolver::RegionResolverClient;
use crate::session::Session;

/// Owns the session state and the resolver for one run.
#[derive(Debug)]
pub struct RegionFinder {
    session: Session,
    resolver: RegionResolverClient,
}

impl RegionFinder {
    /// Opens persisted state and builds the resolver.
    ///
    /// A client region given in the config is selected (and saved) right away.
    ///
    /// # Errors
    ///
    /// Fails if the resolver cannot be built, if the client region is not
    /// selectable, or if not even an in-memory store can be opened.
    pub async fn init(config: &Config) -> Result<Self> {
        let resolver = init_resolver(config).context("Failed to initialize resolver")?;
        let store = init_store_or_memory(&config.db_path)
            .await
            .context("Failed to open persisted state")?;
        let mut session = Session::open(store).await;
        if let Some(code) = &config.client_region {
            session.select_client_region(code).await?;
        }
        debug!(
            "Client region: {}",
            session.client_region().unwrap_or("not selected")
        );
        Ok(Self { session, resolver })
    }

    pub fn new(session: Session, resolver: RegionResolverClient) -> Self {
        Self { session, resolver }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Single lookup, recorded in the log on success.
    pub async fn lookup(&self, job_id: &str) -> Result<LookupOutcome, LookupError> {
        fetch_region(&self.session, &self.resolver, job_id).await
    }

    /// Discovers candidates from `source` and resolves them as one batch.
    pub async fn batch<S: CandidateSource>(&self, source: &mut S) -> Result<BatchReport> {
        let candidates =
            discover_candidates(source, PAGINATION_ATTEMPTS, PAGINATION_SETTLE_DELAY).await?;
        Ok(aggregate_report(&self.resolver, &candidates, self.session.client_region()).await)
    }

    pub async fn recent_lookups(&self) -> Vec<LogView> {
        self.session.log().render_view().await
    }

    pub async fn select_client_region(&mut self, code: &str) -> Result<(), InputError> {
        self.session.select_client_region(code).await
    }
}
