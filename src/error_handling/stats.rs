//! Per-batch failure statistics.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::{LookupError, LookupErrorKind};

/// Failure counters for one aggregation batch.
///
/// Every `LookupErrorKind` is present from construction, so reads never miss.
/// Batches run on a single task, so plain counters are enough.
#[derive(Debug, Clone)]
pub struct LookupStats {
    failures: HashMap<LookupErrorKind, usize>,
}

impl LookupStats {
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for kind in LookupErrorKind::iter() {
            failures.insert(kind, 0);
        }
        LookupStats { failures }
    }

    /// Counts one failure under its kind.
    pub fn record(&mut self, error: &LookupError) {
        *self.failures.entry(error.kind()).or_insert(0) += 1;
    }

    pub fn get_count(&self, kind: LookupErrorKind) -> usize {
        self.failures.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.failures.values().sum()
    }

    /// Non-zero counters in declaration order.
    pub fn breakdown(&self) -> Vec<(LookupErrorKind, usize)> {
        LookupErrorKind::iter()
            .map(|kind| (kind, self.get_count(kind)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

impl Default for LookupStats {
    fn default() -> Self {
        Self::new()
    }
}
