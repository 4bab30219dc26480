//! Remote region resolver.
//!
//! One call per identifier: `GET <base>?jobId=<id>`, JSON body with optional
//! region fields. No retries.

mod types;

pub use types::ResolvedServerInfo;

use std::sync::Arc;

use log::{debug, warn};
use serde_json::Value;
use url::Url;

use crate::config::RESOLVER_QUERY_PARAM;
use crate::error_handling::{InitializationError, InputError, LookupError};
use types::ResolverPayload;

/// Client for the region resolver endpoint.
#[derive(Debug, Clone)]
pub struct RegionResolverClient {
    client: Arc<reqwest::Client>,
    base_url: Url,
}

impl RegionResolverClient {
    /// Creates a resolver client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::ResolverUrlError` if `base_url` does not parse.
    pub fn new(client: Arc<reqwest::Client>, base_url: &str) -> Result<Self, InitializationError> {
        let base_url = Url::parse(base_url)?;
        Ok(Self { client, base_url })
    }

    /// Request URL for an already trimmed identifier.
    pub fn request_url(&self, job_id: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair(RESOLVER_QUERY_PARAM, job_id);
        url
    }

    /// Resolves one server identifier to its region details.
    ///
    /// # Errors
    ///
    /// - `LookupError::Input` if the identifier is blank (no request is sent)
    /// - `LookupError::HttpStatus` on a non-success status
    /// - `LookupError::EmptyBody` if the body is missing or the payload is falsy
    /// - `LookupError::Transport` on network failures
    /// - `LookupError::Decode` if the body is not a resolver payload
    pub async fn resolve(&self, identifier: &str) -> Result<ResolvedServerInfo, LookupError> {
        let job_id = identifier.trim();
        if job_id.is_empty() {
            return Err(InputError::EmptyIdentifier.into());
        }

        let url = self.request_url(job_id);
        debug!("Resolving {job_id} via {url}");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("Resolver request for {job_id} failed: {e}");
            LookupError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Resolver returned {status} for {job_id}");
            return Err(LookupError::HttpStatus(status));
        }

        let body = response.bytes().await.map_err(|e| {
            warn!("Resolver response for {job_id} could not be read: {e}");
            LookupError::Transport(e)
        })?;
        let payload = decode_payload(&body).inspect_err(|e| {
            warn!("Resolver response for {job_id} could not be decoded: {e}");
        })?;
        let Some(payload) = payload else {
            warn!("Resolver returned an empty response for {job_id}");
            return Err(LookupError::EmptyBody);
        };

        let info = ResolvedServerInfo::from_payload(job_id, payload);
        debug!(
            "Resolved {job_id} to {} ({})",
            info.region_name,
            info.region_code.as_deref().unwrap_or("no region code")
        );
        Ok(info)
    }
}

/// Decodes a response body. A blank body or a falsy JSON value (`null`,
/// `false`, `0`, `""`) yields `None`.
fn decode_payload(body: &[u8]) -> Result<Option<ResolverPayload>, LookupError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let value: Value = serde_json::from_slice(body)?;
    let empty = match &value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    };
    if empty {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(value)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::LookupErrorKind;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn resolver_for(server: &MockServer) -> RegionResolverClient {
        RegionResolverClient::new(Arc::new(reqwest::Client::new()), &server.uri())
            .expect("mock server uri should parse")
    }

    #[test]
    fn test_request_url_encodes_identifier() {
        let resolver = RegionResolverClient::new(
            Arc::new(reqwest::Client::new()),
            "https://resolver.example/",
        )
        .expect("url should parse");
        let url = resolver.request_url("a b&c");
        assert_eq!(url.as_str(), "https://resolver.example/?jobId=a+b%26c");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = RegionResolverClient::new(Arc::new(reqwest::Client::new()), "not a url");
        assert!(matches!(
            result,
            Err(InitializationError::ResolverUrlError(_))
        ));
    }

    #[tokio::test]
    async fn test_blank_identifier_sends_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = resolver_for(&server)
            .resolve("   ")
            .await
            .expect_err("blank id should fail");
        assert_eq!(err.kind(), LookupErrorKind::Input);
    }

    #[tokio::test]
    async fn test_resolve_success_trims_identifier() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("jobId", "job-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "regionCode": "us-east",
                "regionName": "US East",
                "continent": "North America",
                "country": "US",
                "subregion": "Virginia"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let info = resolver_for(&server)
            .resolve("  job-1 \n")
            .await
            .expect("lookup should succeed");
        assert_eq!(info.job_id, "job-1");
        assert_eq!(info.region_code.as_deref(), Some("us-east"));
        assert_eq!(info.region_name, "US East");
        assert_eq!(info.country_region(), "North America - US");
        assert_eq!(info.subregion, "Virginia");
    }

    #[tokio::test]
    async fn test_non_success_status_is_http_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = resolver_for(&server)
            .resolve("job-1")
            .await
            .expect_err("404 should fail");
        match err {
            LookupError::HttpStatus(status) => assert_eq!(status.as_u16(), 404),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_null_body_is_empty_body_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        let err = resolver_for(&server)
            .resolve("job-1")
            .await
            .expect_err("null body should fail");
        assert_eq!(err.kind(), LookupErrorKind::EmptyBody);
    }

    #[tokio::test]
    async fn test_missing_body_is_empty_body_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let err = resolver_for(&server)
            .resolve("job-1")
            .await
            .expect_err("missing body should fail");
        assert_eq!(err.kind(), LookupErrorKind::EmptyBody);
    }

    #[tokio::test]
    async fn test_falsy_payloads_are_empty_body_errors() {
        for body in ["false", "0", "\"\"", "  \n"] {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(200).set_body_string(body))
                .mount(&server)
                .await;

            let err = resolver_for(&server)
                .resolve("job-1")
                .await
                .expect_err("falsy body should fail");
            assert_eq!(err.kind(), LookupErrorKind::EmptyBody, "body {body:?}");
        }
    }

    #[test]
    fn test_decode_payload_rejects_non_object() {
        let err = decode_payload(b"[1, 2]").expect_err("array is not a payload");
        assert!(matches!(err, LookupError::Decode(_)));
        assert_eq!(err.kind(), LookupErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_malformed_body_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = resolver_for(&server)
            .resolve("job-1")
            .await
            .expect_err("html body should fail");
        assert_eq!(err.kind(), LookupErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_empty_object_uses_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let info = resolver_for(&server)
            .resolve("job-1")
            .await
            .expect("empty object is a valid response");
        assert_eq!(info.region_code, None);
        assert_eq!(info.region_name, "Unknown");
        assert_eq!(info.country, "Unknown");
    }
}
