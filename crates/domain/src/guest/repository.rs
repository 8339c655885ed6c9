//! Data access for guest records.

use common::{EventId, GuestId};
use doc_store::{CollectionPath, Document, DocumentStore};

use crate::error::Result;

use super::Guest;

/// Result-wrapping facade over an event's guest subcollection.
///
/// Pure pass-through: translates documents to models and store faults to
/// [`crate::DomainError::Store`]. Business rules live in the service layer.
pub struct GuestRepository<S> {
    store: S,
}

impl<S: DocumentStore> GuestRepository<S> {
    /// Creates a repository over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn collection(event_id: &EventId) -> CollectionPath {
        CollectionPath::guests_of(event_id.as_str())
    }

    /// Looks a guest up by identifier within the event's collection.
    pub async fn find(&self, event_id: &EventId, guest_id: &GuestId) -> Result<Option<Guest>> {
        let doc = self
            .store
            .get(&Self::collection(event_id), guest_id.as_str())
            .await?;
        Ok(doc.map(|d| d.decode::<Guest>()).transpose()?)
    }

    /// Returns the full, unsorted guest collection of an event.
    pub async fn list(&self, event_id: &EventId) -> Result<Vec<Guest>> {
        let docs = self.store.list(&Self::collection(event_id)).await?;
        let guests = docs
            .iter()
            .map(|doc| doc.decode::<Guest>())
            .collect::<doc_store::Result<Vec<_>>>()?;
        Ok(guests)
    }

    /// Writes a guest record, keyed by its own identifiers.
    pub async fn save(&self, guest: &Guest) -> Result<()> {
        let doc = Document::encode(guest.id.as_str(), guest)?;
        self.store
            .set(&Self::collection(&guest.event_id), doc)
            .await?;
        Ok(())
    }

    /// Deletes a guest record.
    pub async fn delete(&self, event_id: &EventId, guest_id: &GuestId) -> Result<()> {
        self.store
            .delete(&Self::collection(event_id), guest_id.as_str())
            .await?;
        Ok(())
    }
}
