//! Resolver data structures.

use serde::Deserialize;

use crate::config::UNKNOWN;

/// Raw resolver payload. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResolverPayload {
    pub region_code: Option<String>,
    pub region_name: Option<String>,
    pub continent: Option<String>,
    pub country: Option<String>,
    pub subregion: Option<String>,
}

/// Region details for one server, with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedServerInfo {
    pub job_id: String,
    /// Region code as reported by the resolver; not validated
    pub region_code: Option<String>,
    /// Display name; falls back to the region code, then "Unknown"
    pub region_name: String,
    pub continent: String,
    pub country: String,
    pub subregion: String,
}

impl ResolvedServerInfo {
    /// Builds the info for `job_id`, treating empty strings as missing.
    pub(crate) fn from_payload(job_id: &str, payload: ResolverPayload) -> Self {
        let region_code = present(payload.region_code);
        let region_name = present(payload.region_name)
            .or_else(|| region_code.clone())
            .unwrap_or_else(|| UNKNOWN.to_string());

        Self {
            job_id: job_id.to_string(),
            region_code,
            region_name,
            continent: or_unknown(payload.continent),
            country: or_unknown(payload.country),
            subregion: or_unknown(payload.subregion),
        }
    }

    /// `continent - country`, or only the country when the continent is unknown.
    pub fn country_region(&self) -> String {
        if self.continent == UNKNOWN {
            self.country.clone()
        } else {
            format!("{} - {}", self.continent, self.country)
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn or_unknown(value: Option<String>) -> String {
    present(value).unwrap_or_else(|| UNKNOWN.to_string())
}
