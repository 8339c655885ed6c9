//! Collection path convention.
//!
//! Collections are addressed by slash-separated paths mirroring the backend
//! layout: `events` for the event collection and `events/{eventId}/guests`
//! for the guest subcollection of a single event.

use crate::error::{Result, StoreError};

/// A validated collection path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionPath(String);

impl CollectionPath {
    /// Creates a collection path from a raw string.
    ///
    /// Rejects empty paths, blank segments, and leading/trailing slashes.
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        if path.is_empty() || path.split('/').any(|segment| segment.trim().is_empty()) {
            return Err(StoreError::InvalidPath(path));
        }
        Ok(Self(path))
    }

    /// The top-level event collection.
    pub fn events() -> Self {
        Self("events".to_string())
    }

    /// The guest subcollection of one event.
    pub fn guests_of(event_id: &str) -> Self {
        Self(format!("events/{event_id}/guests"))
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CollectionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CollectionPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
