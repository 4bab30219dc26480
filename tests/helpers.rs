// Shared test helpers for resolver mocks and test configuration.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::io::Write;

use region_finder::{Config, LogFormat, LogLevel};
use tempfile::{NamedTempFile, TempDir};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a Config pointing at the mock resolver with its database in `temp_dir`.
#[allow(dead_code)] // Used by other test files
pub fn create_test_config(
    server: &MockServer,
    temp_dir: &TempDir,
    client_region: Option<&str>,
) -> Config {
    Config {
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
        db_path: temp_dir.path().join("region_finder.db"),
        resolver_url: server.uri(),
        client_region: client_region.map(str::to_string),
        timeout_seconds: Some(5),
        user_agent: "region_finder_test/1.0".to_string(),
    }
}

/// Mounts a successful resolver response for `job_id`.
#[allow(dead_code)]
pub async fn mount_region(server: &MockServer, job_id: &str, region_code: &str, country: &str) {
    Mock::given(method("GET"))
        .and(query_param("jobId", job_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "regionCode": region_code,
            "regionName": region_code.to_uppercase(),
            "continent": "Somewhere",
            "country": country,
            "subregion": "Test subregion",
        })))
        .mount(server)
        .await;
}

/// Mounts a failing resolver response for `job_id`.
#[allow(dead_code)]
pub async fn mount_failure(server: &MockServer, job_id: &str, status: u16) {
    Mock::given(method("GET"))
        .and(query_param("jobId", job_id))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Writes candidate lines to a temporary file (sync I/O).
#[allow(dead_code)]
pub fn write_candidates_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write candidate");
    }
    file.flush().expect("Failed to flush file");
    file
}
