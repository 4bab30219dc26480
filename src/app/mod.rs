//! Output helpers used by the command-line binary.

pub mod output;

// Re-export public API
pub use output::{
    format_batch, format_client_region, format_log, format_lookup, format_lookup_failure,
    format_regions,
};
