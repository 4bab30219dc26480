//! Static latency estimation between a client region and a server region.
//!
//! This is a lookup table, not a measurement.

use std::fmt;

use log::trace;

use super::classify::{classify, MacroRegion};
use crate::config::{
    AS_EU_MS, AS_NA_MS, DEFAULT_CROSS_REGION_MS, EU_NA_MS, SAME_CONTINENT_MS, SAME_REGION_MS,
};

/// Why an estimate could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownReason {
    /// No client region has been selected.
    NoClientRegion,
    /// The resolver did not report a region code for the server.
    NoServerRegion,
}

/// Estimated round-trip latency, or the reason there is none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatencyEstimate {
    Millis(u32),
    Unknown(UnknownReason),
}

impl LatencyEstimate {
    pub fn millis(&self) -> Option<u32> {
        match self {
            LatencyEstimate::Millis(ms) => Some(*ms),
            LatencyEstimate::Unknown(_) => None,
        }
    }
}

impl fmt::Display for LatencyEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatencyEstimate::Millis(ms) => write!(f, "~{ms} ms"),
            LatencyEstimate::Unknown(UnknownReason::NoClientRegion) => {
                f.write_str("select your device region above.")
            }
            LatencyEstimate::Unknown(UnknownReason::NoServerRegion) => {
                f.write_str("unknown (no region code).")
            }
        }
    }
}

/// Estimates latency from `client` to `server`.
///
/// Symmetric in its two inputs. Empty codes count as absent.
pub fn estimate(client: Option<&str>, server: Option<&str>) -> LatencyEstimate {
    let Some(client) = client.filter(|c| !c.is_empty()) else {
        return LatencyEstimate::Unknown(UnknownReason::NoClientRegion);
    };
    let Some(server) = server.filter(|s| !s.is_empty()) else {
        return LatencyEstimate::Unknown(UnknownReason::NoServerRegion);
    };

    if client == server {
        return LatencyEstimate::Millis(SAME_REGION_MS);
    }

    let (a, b) = (classify(Some(client)), classify(Some(server)));
    let ms = macro_pair_ms(a, b);
    trace!("{client} -> {server}: {} pair, {ms} ms", pair_key(a, b));
    LatencyEstimate::Millis(ms)
}

/// Table over every macro-region pair.
fn macro_pair_ms(a: MacroRegion, b: MacroRegion) -> u32 {
    use MacroRegion::*;

    match (a, b) {
        (Asia, Asia) | (Europe, Europe) | (NorthAmerica, NorthAmerica) | (Other, Other) => {
            SAME_CONTINENT_MS
        }
        (Europe, NorthAmerica) | (NorthAmerica, Europe) => EU_NA_MS,
        (Asia, Europe) | (Europe, Asia) => AS_EU_MS,
        (Asia, NorthAmerica) | (NorthAmerica, Asia) => AS_NA_MS,
        (Other, _) | (_, Other) => DEFAULT_CROSS_REGION_MS,
    }
}

/// Unordered pair key such as `AS-EU`, built from the sorted tags.
pub fn pair_key(a: MacroRegion, b: MacroRegion) -> String {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    format!("{low}-{high}")
}
