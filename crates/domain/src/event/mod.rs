//! Event model and validation.

mod status;

pub mod repository;
pub mod service;

pub use repository::EventRepository;
pub use service::EventService;
pub use status::EventStatus;

use chrono::{DateTime, NaiveDate, Utc};
use common::{EventId, UserId, ValidationError};
use serde::{Deserialize, Serialize};

/// An organizer-owned gathering with a fixed guest capacity.
///
/// Field names serialize in camelCase to match the document convention of
/// the backing store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique event identifier.
    pub id: EventId,

    /// Account of the organizer who owns the event.
    pub owner_id: UserId,

    /// Display name.
    pub name: String,

    /// Scheduled date and time.
    pub starts_at: DateTime<Utc>,

    /// Venue name.
    pub location: String,

    /// Maximum number of admitted guests.
    pub capacity: u32,

    /// Stored lifecycle status; refresh through [`Event::status_on`].
    pub status: EventStatus,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Running counter of invited guests, maintained outside this core.
    pub total_invited: u32,

    /// Running counter of checked-in guests, maintained outside this core.
    pub total_checked_in: u32,

    /// Whether guard-mode scanning is enabled for this event.
    pub guard_mode: bool,
}

/// Raw input for creating an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDraft {
    pub name: String,
    pub starts_at: DateTime<Utc>,
    pub location: String,
    pub capacity: i32,
    #[serde(default)]
    pub guard_mode: bool,
}

impl EventDraft {
    /// Creates a draft with guard mode off.
    pub fn new(
        name: impl Into<String>,
        starts_at: DateTime<Utc>,
        location: impl Into<String>,
        capacity: i32,
    ) -> Self {
        Self {
            name: name.into(),
            starts_at,
            location: location.into(),
            capacity,
            guard_mode: false,
        }
    }
}

impl Event {
    /// Validates a draft and builds a new event owned by `owner_id`.
    ///
    /// Counters start at zero and the status is derived from the draft date
    /// as seen at `now`.
    pub fn create(
        id: EventId,
        owner_id: UserId,
        draft: &EventDraft,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if draft.name.trim().is_empty() {
            return Err(ValidationError::Blank {
                field: "event name",
            });
        }
        if draft.location.trim().is_empty() {
            return Err(ValidationError::Blank {
                field: "event location",
            });
        }
        if draft.capacity <= 0 {
            return Err(ValidationError::NotPositive {
                field: "event capacity",
                value: i64::from(draft.capacity),
            });
        }

        let status = EventStatus::derive(
            draft.starts_at.date_naive(),
            EventStatus::Upcoming,
            now.date_naive(),
        );

        Ok(Self {
            id,
            owner_id,
            name: draft.name.clone(),
            starts_at: draft.starts_at,
            location: draft.location.clone(),
            capacity: draft.capacity as u32,
            status,
            created_at: now,
            total_invited: 0,
            total_checked_in: 0,
            guard_mode: draft.guard_mode,
        })
    }

    /// Day-granular event date.
    pub fn date(&self) -> NaiveDate {
        self.starts_at.date_naive()
    }

    /// Status of this event as seen on `today`.
    ///
    /// A stored `Cancelled` is sticky; anything else is recomputed from the
    /// event date.
    pub fn status_on(&self, today: NaiveDate) -> EventStatus {
        EventStatus::derive(self.date(), self.status, today)
    }

    /// Marks the event cancelled. There is no way back.
    pub fn cancel(&mut self) {
        self.status = EventStatus::Cancelled;
    }

    /// Returns true if one more guest fits under the capacity.
    pub fn has_room_for_more(&self, current_guests: usize) -> bool {
        current_guests < self.capacity as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn draft() -> EventDraft {
        EventDraft::new("Launch party", Utc::now(), "Rooftop", 50)
    }

    fn owner() -> UserId {
        UserId::parse("owner-1").unwrap()
    }

    #[test]
    fn create_builds_event_with_zeroed_counters() {
        let event = Event::create(EventId::generate(), owner(), &draft(), Utc::now()).unwrap();
        assert_eq!(event.capacity, 50);
        assert_eq!(event.total_invited, 0);
        assert_eq!(event.total_checked_in, 0);
        assert!(!event.guard_mode);
    }

    #[test]
    fn create_rejects_blank_name_and_location() {
        let mut d = draft();
        d.name = "  ".to_string();
        assert!(Event::create(EventId::generate(), owner(), &d, Utc::now()).is_err());

        let mut d = draft();
        d.location = String::new();
        assert!(Event::create(EventId::generate(), owner(), &d, Utc::now()).is_err());
    }

    #[test]
    fn create_rejects_non_positive_capacity() {
        for capacity in [0, -1, -50] {
            let mut d = draft();
            d.capacity = capacity;
            let err = Event::create(EventId::generate(), owner(), &d, Utc::now()).unwrap_err();
            assert!(matches!(err, ValidationError::NotPositive { .. }));
        }
    }

    #[test]
    fn create_derives_initial_status_from_date() {
        let now = Utc::now();

        let event = Event::create(EventId::generate(), owner(), &draft(), now).unwrap();
        assert_eq!(event.status, EventStatus::Active);

        let mut d = draft();
        d.starts_at = now + chrono::Duration::days(7);
        let event = Event::create(EventId::generate(), owner(), &d, now).unwrap();
        assert_eq!(event.status, EventStatus::Upcoming);
    }

    #[test]
    fn status_on_recomputes_from_event_date() {
        let now = Utc::now();
        let event = Event::create(EventId::generate(), owner(), &draft(), now).unwrap();

        let tomorrow = now.date_naive().checked_add_days(Days::new(1)).unwrap();
        assert_eq!(event.status_on(tomorrow), EventStatus::Ended);
    }

    #[test]
    fn cancel_is_sticky_under_status_on() {
        let now = Utc::now();
        let mut d = draft();
        d.starts_at = now + chrono::Duration::days(7);
        let mut event = Event::create(EventId::generate(), owner(), &d, now).unwrap();

        event.cancel();
        assert_eq!(event.status_on(now.date_naive()), EventStatus::Cancelled);
    }

    #[test]
    fn has_room_for_more_respects_capacity() {
        let mut d = draft();
        d.capacity = 2;
        let event = Event::create(EventId::generate(), owner(), &d, Utc::now()).unwrap();

        assert!(event.has_room_for_more(0));
        assert!(event.has_room_for_more(1));
        assert!(!event.has_room_for_more(2));
        assert!(!event.has_room_for_more(3));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let event = Event::create(EventId::generate(), owner(), &draft(), Utc::now()).unwrap();
        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("ownerId").is_some());
        assert!(json.get("startsAt").is_some());
        assert!(json.get("totalInvited").is_some());
        assert!(json.get("guardMode").is_some());
    }
}
