//! Domain error types.

use common::{EventId, ValidationError};
use doc_store::StoreError;
use thiserror::Error;

/// Errors that can occur during admission and event operations.
///
/// Every expected business failure is one of these values; nothing in the
/// designed paths panics across a use-case boundary.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input failed validation; detected before any store call.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A referenced event or guest does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Admitting another guest would exceed the event's capacity.
    #[error("capacity reached for event {event_id} ({capacity} guests)")]
    CapacityExceeded { event_id: EventId, capacity: u32 },

    /// The document store failed or returned unreadable data.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for domain operations.
pub type Result<T> = std::result::Result<T, DomainError>;
