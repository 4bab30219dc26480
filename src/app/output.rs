//! Terminal rendering of lookups, batches and the search log.
//!
//! Functions return strings so the binary decides where they go.

use colored::*;

use crate::config::UNKNOWN;
use crate::lookup::LookupOutcome;
use crate::lookup_log::LogView;
use crate::pipeline::BatchReport;
use crate::region::{find_client_region, CLIENT_REGIONS};

/// Result block of a single lookup.
pub fn format_lookup(outcome: &LookupOutcome) -> String {
    format!(
        "{}\nContinental region: {}\nCountry region: {}\nSubregion: {}\nEstimated ping: {}",
        "Server found".green(),
        outcome.info.region_name,
        outcome.country_region(),
        outcome.info.subregion,
        outcome.latency
    )
}

/// Generic failure line; detailed causes go to the log.
pub fn format_lookup_failure() -> String {
    "An error has occurred".red().to_string()
}

/// One line per slot followed by a summary.
pub fn format_batch(report: &BatchReport) -> String {
    let mut out = String::new();
    for (idx, slot) in report.slots.iter().enumerate() {
        let hint = slot
            .candidate
            .reported_ping_ms
            .map(|ms| format!("{ms} ms"))
            .unwrap_or_else(|| "-".to_string());
        let line = match &slot.result {
            Ok(resolved) => format!(
                "{:>2}. {}  {} | {} | est. {} | listed {}",
                idx + 1,
                slot.candidate.job_id,
                resolved.info.region_name,
                resolved.info.country_region(),
                resolved.latency,
                hint
            ),
            Err(e) => format!(
                "{:>2}. {}  {} ({})",
                idx + 1,
                slot.candidate.job_id,
                "lookup failed".red(),
                e.kind()
            ),
        };
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str(&format!(
        "Resolved {} of {} server{} ({} failed)",
        report.succeeded(),
        report.total(),
        if report.total() == 1 { "" } else { "s" },
        report.failed()
    ));
    for (kind, count) in report.stats.breakdown() {
        out.push_str(&format!("\n   {kind}: {count}"));
    }
    out
}

/// Search log, newest first.
pub fn format_log(views: &[LogView]) -> String {
    if views.is_empty() {
        return "No searches yet.".to_string();
    }

    views
        .iter()
        .map(|view| {
            let e = &view.entry;
            let tag = if view.last_searched {
                format!("  {}", "Last searched server".green().bold())
            } else {
                String::new()
            };
            format!(
                "JobId: {}{}\n  Region: {}\n  Country: {}\n  Subregion: {}\n  Ping: {}",
                e.job_id,
                tag,
                or_unknown(&e.region_name),
                or_unknown(&e.country_region),
                or_unknown(&e.subregion),
                or_unknown(&e.ping_text)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Selectable client regions, marking the current one.
pub fn format_regions(selected: Option<&str>) -> String {
    CLIENT_REGIONS
        .iter()
        .map(|region| {
            let marker = if Some(region.code) == selected { "*" } else { " " };
            format!("{marker} {:<16} {}", region.code, region.label)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_client_region(selected: Option<&str>) -> String {
    match selected.and_then(find_client_region) {
        Some(region) => format!("Device region: {} ({})", region.label, region.code),
        None => "Device region: not selected".to_string(),
    }
}

fn or_unknown(value: &str) -> &str {
    if value.is_empty() {
        UNKNOWN
    } else {
        value
    }
}
