//! HTTP route handlers.

pub mod events;
pub mod guests;
pub mod health;
pub mod metrics;

use std::sync::Arc;

use doc_store::DocumentStore;
use domain::{EventService, GuestService};
use session::FlagService;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: DocumentStore> {
    pub events: EventService<S>,
    pub guests: GuestService<S>,
    pub flags: Arc<dyn FlagService>,
}

impl<S: DocumentStore> AppState<S> {
    /// Rejects the request while maintenance mode is on.
    ///
    /// An unreachable flag backend fails open with a warning so a flag
    /// outage cannot take admission down with it.
    pub async fn require_not_in_maintenance(&self) -> Result<(), ApiError> {
        match self.flags.maintenance().await {
            Ok(true) => Err(ApiError::Maintenance),
            Ok(false) => Ok(()),
            Err(err) => {
                tracing::warn!(error = %err, "flag service unavailable, allowing request");
                Ok(())
            }
        }
    }
}
