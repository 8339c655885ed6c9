//! Guest admission use cases.

use chrono::Utc;
use common::{EventId, GuardId, GuestId};
use doc_store::DocumentStore;

use crate::error::{DomainError, Result};
use crate::event::EventRepository;

use super::{Guest, GuestDraft, GuestRepository};

/// Use cases for guest registration, check-in, and roster maintenance.
///
/// Every operation validates its input before the first store call, runs
/// its store calls sequentially, and returns a typed error on the first
/// failure; nothing is written on a failed path.
///
/// The registration capacity check reads the guest list and then writes
/// without a transaction. Two concurrent registrations near a full event
/// can both pass the check and jointly overshoot the capacity; consistency
/// beyond a single call is the store's.
pub struct GuestService<S> {
    events: EventRepository<S>,
    guests: GuestRepository<S>,
}

impl<S: DocumentStore + Clone> GuestService<S> {
    /// Creates a service with both repositories over the same store.
    pub fn new(store: S) -> Self {
        Self {
            events: EventRepository::new(store.clone()),
            guests: GuestRepository::new(store),
        }
    }
}

impl<S: DocumentStore> GuestService<S> {
    /// Registers a guest for an event, enforcing the capacity invariant.
    ///
    /// Fails with `Validation` on bad input, `NotFound` when the event does
    /// not exist, and `CapacityExceeded` when the guest list is full.
    #[tracing::instrument(skip(self, draft))]
    pub async fn register(&self, event_id: &str, draft: &GuestDraft) -> Result<Guest> {
        let event_id = EventId::parse(event_id)?;
        let guest = Guest::admit(GuestId::generate(), event_id.clone(), draft)?;

        let event = self.events.find(&event_id).await?.ok_or_else(|| {
            DomainError::NotFound {
                kind: "event",
                id: event_id.to_string(),
            }
        })?;

        let roster = self.guests.list(&event_id).await?;
        if !event.has_room_for_more(roster.len()) {
            metrics::counter!("admission_capacity_rejections_total").increment(1);
            tracing::warn!(
                %event_id,
                capacity = event.capacity,
                "registration rejected: event at capacity"
            );
            return Err(DomainError::CapacityExceeded {
                event_id,
                capacity: event.capacity,
            });
        }

        self.guests.save(&guest).await?;
        metrics::counter!("admission_guests_registered_total").increment(1);
        tracing::info!(%event_id, guest_id = %guest.id, "guest registered");
        Ok(guest)
    }

    /// Checks a guest in, recording timestamp and operator.
    ///
    /// An unknown guest surfaces `NotFound`. A guest who is already checked
    /// in is returned unchanged, preserving the first check-in's timestamp
    /// and operator.
    #[tracing::instrument(skip(self))]
    pub async fn check_in(&self, event_id: &str, guest_id: &str, guard_id: &str) -> Result<Guest> {
        let event_id = EventId::parse(event_id)?;
        let guest_id = GuestId::parse(guest_id)?;
        let guard_id = GuardId::parse(guard_id)?;

        let Some(mut guest) = self.guests.find(&event_id, &guest_id).await? else {
            return Err(DomainError::NotFound {
                kind: "guest",
                id: guest_id.to_string(),
            });
        };

        if guest.is_checked_in() {
            tracing::info!(%event_id, %guest_id, "guest already checked in");
            return Ok(guest);
        }

        guest.check_in(guard_id, Utc::now());
        self.guests.save(&guest).await?;
        metrics::counter!("admission_check_ins_total").increment(1);
        tracing::info!(%event_id, %guest_id, "guest checked in");
        Ok(guest)
    }

    /// Overwrites a guest record.
    ///
    /// The stored identifiers are forced to the path identifiers so the
    /// record stays scoped to its event. No business invariant is
    /// re-checked; in particular, capacity is not.
    #[tracing::instrument(skip(self, guest))]
    pub async fn update(&self, event_id: &str, guest_id: &str, mut guest: Guest) -> Result<Guest> {
        let event_id = EventId::parse(event_id)?;
        let guest_id = GuestId::parse(guest_id)?;

        guest.id = guest_id;
        guest.event_id = event_id;
        self.guests.save(&guest).await?;
        Ok(guest)
    }

    /// Deletes a guest record. Event counters are left untouched.
    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, event_id: &str, guest_id: &str) -> Result<()> {
        let event_id = EventId::parse(event_id)?;
        let guest_id = GuestId::parse(guest_id)?;
        self.guests.delete(&event_id, &guest_id).await
    }

    /// Lists the full, unsorted guest collection of an event.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, event_id: &str) -> Result<Vec<Guest>> {
        let event_id = EventId::parse(event_id)?;
        self.guests.list(&event_id).await
    }
}
