//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The resolver base URL could not be parsed.
    #[error("Invalid resolver URL: {0}")]
    ResolverUrlError(#[from] url::ParseError),
}

/// Invalid input rejected before any network or storage work.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Server identifier was empty or whitespace only.
    #[error("Server identifier is empty")]
    EmptyIdentifier,

    /// Place identifier was empty or whitespace only.
    #[error("Place identifier is empty")]
    EmptyPlaceId,

    /// Client region code is not one of the selectable regions.
    #[error("Unknown client region: {0}")]
    UnknownClientRegion(String),
}

/// Failure of a single resolver lookup.
///
/// Each variant is isolated to the lookup that produced it; sibling lookups in
/// a batch are unaffected.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The identifier was rejected before any request was sent.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The resolver answered with a non-success status.
    #[error("Resolver returned HTTP {0}")]
    HttpStatus(StatusCode),

    /// The resolver answered with no body, or a `null`, `false`, `0` or `""` payload.
    #[error("Resolver returned an empty response")]
    EmptyBody,

    /// Network-level failure (DNS, connection, timeout, reading the body).
    #[error("Resolver request failed: {0}")]
    Transport(#[from] ReqwestError),

    /// The body was not a resolver payload.
    #[error("Resolver response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LookupError {
    /// Returns the category of this failure.
    pub fn kind(&self) -> LookupErrorKind {
        match self {
            LookupError::Input(_) => LookupErrorKind::Input,
            LookupError::HttpStatus(_) => LookupErrorKind::HttpStatus,
            LookupError::EmptyBody => LookupErrorKind::EmptyBody,
            LookupError::Transport(_) | LookupError::Decode(_) => LookupErrorKind::Transport,
        }
    }
}

/// Categories of lookup failures, used for per-batch counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum LookupErrorKind {
    Input,
    HttpStatus,
    EmptyBody,
    Transport,
}

impl std::fmt::Display for LookupErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LookupErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupErrorKind::Input => "Invalid identifier",
            LookupErrorKind::HttpStatus => "Resolver HTTP status error",
            LookupErrorKind::EmptyBody => "Resolver empty response",
            LookupErrorKind::Transport => "Resolver transport error",
        }
    }
}

/// Persistence failure. Never surfaced past the log and session layers.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Error creating the database file or its directory.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// Stored value could not be encoded or decoded.
    #[error("Stored value encoding error: {0}")]
    EncodingError(#[from] serde_json::Error),
}
