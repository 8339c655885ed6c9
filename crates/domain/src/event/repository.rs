//! Data access for event records.

use common::{EventId, UserId};
use doc_store::{CollectionPath, Document, DocumentStore};

use crate::error::Result;

use super::Event;

/// Result-wrapping facade over the top-level event collection.
///
/// Like the guest repository, this is a pass-through: no business rules,
/// just document mapping and typed store failures.
pub struct EventRepository<S> {
    store: S,
}

impl<S: DocumentStore> EventRepository<S> {
    /// Creates a repository over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Looks an event up by identifier.
    pub async fn find(&self, event_id: &EventId) -> Result<Option<Event>> {
        let doc = self
            .store
            .get(&CollectionPath::events(), event_id.as_str())
            .await?;
        Ok(doc.map(|d| d.decode::<Event>()).transpose()?)
    }

    /// Writes an event record.
    pub async fn save(&self, event: &Event) -> Result<()> {
        let doc = Document::encode(event.id.as_str(), event)?;
        self.store.set(&CollectionPath::events(), doc).await?;
        Ok(())
    }

    /// Lists the events owned by one organizer.
    ///
    /// The store has no server-side query surface; this lists the
    /// collection and filters by owner here.
    pub async fn list_for_owner(&self, owner_id: &UserId) -> Result<Vec<Event>> {
        let docs = self.store.list(&CollectionPath::events()).await?;
        let mut events = Vec::new();
        for doc in &docs {
            let event: Event = doc.decode()?;
            if event.owner_id == *owner_id {
                events.push(event);
            }
        }
        Ok(events)
    }

    /// Deletes an event record. Guests are not cascaded.
    pub async fn delete(&self, event_id: &EventId) -> Result<()> {
        self.store
            .delete(&CollectionPath::events(), event_id.as_str())
            .await?;
        Ok(())
    }
}
