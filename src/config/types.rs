//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::constants::{DB_PATH, DEFAULT_RESOLVER_URL, DEFAULT_USER_AGENT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use region_finder::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     db_path: PathBuf::from("./state.db"),
///     client_region: Some("eu-west".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Database path (SQLite file) holding the lookup log and saved client region
    pub db_path: PathBuf,

    /// Resolver endpoint base URL
    pub resolver_url: String,

    /// Client region to use for this run; saved for later runs when set
    pub client_region: Option<String>,

    /// Optional per-request timeout in seconds (transport default when unset)
    pub timeout_seconds: Option<u64>,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            db_path: PathBuf::from(DB_PATH),
            resolver_url: DEFAULT_RESOLVER_URL.to_string(),
            client_region: None,
            timeout_seconds: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Resolve one server with a client region
/// region_finder --client-region eu-west lookup 6f1c0a4e-0000-4000-8000-000000000000
///
/// # Resolve every server listed in a file
/// region_finder batch servers.txt
///
/// # Show the last three lookups
/// region_finder log
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "region_finder",
    about = "Finds the region of game servers and estimates ping from your region."
)]
pub struct Opt {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Database path (SQLite file)
    #[arg(long, global = true, value_parser, default_value = DB_PATH)]
    pub db_path: PathBuf,

    /// Resolver endpoint base URL
    #[arg(long, global = true, default_value = DEFAULT_RESOLVER_URL)]
    pub resolver_url: String,

    /// Your approximate region (see `regions`); remembered for later runs
    #[arg(long, global = true)]
    pub client_region: Option<String>,

    /// Per-request timeout in seconds (unset uses the transport default)
    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    /// HTTP User-Agent header value
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a single server job id and record it in the search log
    Lookup {
        /// Server job id
        job_id: String,
    },
    /// Resolve every candidate listed in a file (`-` for stdin)
    ///
    /// One candidate per line: `<jobId>[,<ping ms>]`. Blank lines and lines
    /// starting with `#` are skipped.
    Batch {
        /// Candidates file
        #[arg(value_parser)]
        file: PathBuf,
    },
    /// Show the recent search log, newest first
    Log,
    /// Show the saved client region, or save a new one
    Region {
        /// Region code to save
        code: Option<String>,
    },
    /// List the selectable client regions
    Regions,
    /// Print the client launch URI for a server
    Join {
        /// Place id of the experience
        place_id: String,
        /// Server job id
        job_id: String,
    },
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        Self {
            log_level: opt.log_level.clone(),
            log_format: opt.log_format.clone(),
            db_path: opt.db_path.clone(),
            resolver_url: opt.resolver_url.clone(),
            client_region: opt.client_region.clone(),
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent.clone(),
        }
    }
}
