//! Explicit session state: the selected client region and the lookup log.
//!
//! Owned by the orchestrating layer and passed into the lookup flows.

use log::{debug, warn};

use crate::config::DEVICE_REGION_KEY;
use crate::error_handling::InputError;
use crate::lookup_log::RecentLookupLog;
use crate::region::is_client_region;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone)]
pub struct Session {
    store: KeyValueStore,
    log: RecentLookupLog,
    client_region: Option<String>,
}

impl Session {
    /// Opens a session, restoring the saved client region if it is still selectable.
    pub async fn open(store: KeyValueStore) -> Self {
        let client_region = match store.get(DEVICE_REGION_KEY).await {
            Ok(Some(code)) if is_client_region(&code) => Some(code),
            Ok(Some(code)) => {
                debug!("Ignoring saved client region {code:?}: not a selectable region");
                None
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Could not read saved client region: {e}");
                None
            }
        };

        Self {
            log: RecentLookupLog::new(store.clone()),
            store,
            client_region,
        }
    }

    pub fn client_region(&self) -> Option<&str> {
        self.client_region.as_deref()
    }

    /// Selects and saves the client region.
    ///
    /// # Errors
    ///
    /// Returns `InputError::UnknownClientRegion` for codes outside the catalog.
    /// Failing to save is only logged; the selection still applies to this session.
    pub async fn select_client_region(&mut self, code: &str) -> Result<(), InputError> {
        let code = code.trim();
        if !is_client_region(code) {
            return Err(InputError::UnknownClientRegion(code.to_string()));
        }
        if let Err(e) = self.store.set(DEVICE_REGION_KEY, code).await {
            warn!("Could not save client region: {e}");
        }
        self.client_region = Some(code.to_string());
        Ok(())
    }

    pub fn log(&self) -> &RecentLookupLog {
        &self.log
    }
}
