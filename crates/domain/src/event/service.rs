//! Event lifecycle use cases.

use chrono::Utc;
use common::{EventId, UserId};
use doc_store::DocumentStore;

use crate::error::{DomainError, Result};

use super::{Event, EventDraft, EventRepository};

/// Use cases for organizer-facing event management.
///
/// Reads refresh the stored status against today's date before returning,
/// so callers always see the date-derived lifecycle state; `Cancelled`
/// stays sticky through that refresh.
pub struct EventService<S> {
    events: EventRepository<S>,
}

impl<S: DocumentStore> EventService<S> {
    /// Creates a service over the given store.
    pub fn new(store: S) -> Self {
        Self {
            events: EventRepository::new(store),
        }
    }

    /// Creates an event owned by `owner_id`.
    #[tracing::instrument(skip(self, draft))]
    pub async fn create(&self, owner_id: &str, draft: &EventDraft) -> Result<Event> {
        let owner_id = UserId::parse(owner_id)?;
        let event = Event::create(EventId::generate(), owner_id, draft, Utc::now())?;
        self.events.save(&event).await?;
        tracing::info!(event_id = %event.id, "event created");
        Ok(event)
    }

    /// Fetches an event with its status refreshed against today.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, event_id: &str) -> Result<Event> {
        let event_id = EventId::parse(event_id)?;
        let mut event = self.find_existing(&event_id).await?;
        event.status = event.status_on(Utc::now().date_naive());
        Ok(event)
    }

    /// Cancels an event. The status is sticky from here on.
    #[tracing::instrument(skip(self))]
    pub async fn cancel(&self, event_id: &str) -> Result<Event> {
        let event_id = EventId::parse(event_id)?;
        let mut event = self.find_existing(&event_id).await?;
        event.cancel();
        self.events.save(&event).await?;
        tracing::info!(%event_id, "event cancelled");
        Ok(event)
    }

    /// Lists the events owned by `owner_id`, statuses refreshed.
    #[tracing::instrument(skip(self))]
    pub async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<Event>> {
        let owner_id = UserId::parse(owner_id)?;
        let mut events = self.events.list_for_owner(&owner_id).await?;
        let today = Utc::now().date_naive();
        for event in &mut events {
            event.status = event.status_on(today);
        }
        Ok(events)
    }

    /// Turns guard-mode scanning on or off for an event.
    #[tracing::instrument(skip(self))]
    pub async fn set_guard_mode(&self, event_id: &str, enabled: bool) -> Result<Event> {
        let event_id = EventId::parse(event_id)?;
        let mut event = self.find_existing(&event_id).await?;
        event.guard_mode = enabled;
        self.events.save(&event).await?;
        Ok(event)
    }

    async fn find_existing(&self, event_id: &EventId) -> Result<Event> {
        self.events
            .find(event_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                kind: "event",
                id: event_id.to_string(),
            })
    }
}
