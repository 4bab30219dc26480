//! Client launch links.

use crate::config::JOIN_URI_SCHEME;
use crate::error_handling::InputError;

/// Builds the launch URI that joins `job_id` in `place_id`.
///
/// Both identifiers are trimmed and must be non-empty.
pub fn join_uri(place_id: &str, job_id: &str) -> Result<String, InputError> {
    let place_id = place_id.trim();
    let job_id = job_id.trim();
    if place_id.is_empty() {
        return Err(InputError::EmptyPlaceId);
    }
    if job_id.is_empty() {
        return Err(InputError::EmptyIdentifier);
    }
    Ok(format!(
        "{JOIN_URI_SCHEME}://placeId={place_id}&gameInstanceId={job_id}"
    ))
}
