//! Event lifecycle status.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status of an event.
///
/// Status is a function of the event date compared against the current
/// day, except `Cancelled`, which is sticky: once stored it overrides any
/// date computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// The event date is still ahead.
    #[default]
    Upcoming,

    /// The event is today.
    Active,

    /// The event date has passed.
    Ended,

    /// Explicitly cancelled by the organizer (terminal state).
    Cancelled,
}

impl EventStatus {
    /// Derives the status of an event dated `event_date` as seen on `today`.
    ///
    /// Both dates are day-granular. A stored `Cancelled` wins regardless of
    /// the dates. Pure and deterministic: no clock access, no side effects.
    pub fn derive(event_date: NaiveDate, stored: EventStatus, today: NaiveDate) -> EventStatus {
        if stored == EventStatus::Cancelled {
            return EventStatus::Cancelled;
        }
        match event_date.cmp(&today) {
            Ordering::Greater => EventStatus::Upcoming,
            Ordering::Equal => EventStatus::Active,
            Ordering::Less => EventStatus::Ended,
        }
    }

    /// Returns true if no further transitions are possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, EventStatus::Cancelled)
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Active => "active",
            EventStatus::Ended => "ended",
            EventStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
