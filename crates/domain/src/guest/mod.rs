//! Guest model and validation.

pub mod repository;
pub mod service;

pub use repository::GuestRepository;
pub use service::GuestService;

use chrono::{DateTime, Utc};
use common::{EventId, GuardId, GuestId, UserId, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Invitation status of a guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InviteStatus {
    /// Invited, not yet responded.
    #[default]
    Pending,

    /// Confirmed attendance.
    Confirmed,

    /// Declined the invitation.
    Declined,
}

impl InviteStatus {
    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            InviteStatus::Pending => "pending",
            InviteStatus::Confirmed => "confirmed",
            InviteStatus::Declined => "declined",
        }
    }
}

impl std::fmt::Display for InviteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An invitee record scoped to one event.
///
/// Field names serialize in camelCase to match the document convention of
/// the backing store. The check-in fields move together: `checked_in_at`
/// and `checked_in_by` are `None` exactly while `checked_in` is false, and
/// the only mutation that touches them is [`Guest::check_in`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    /// Unique guest identifier within the event's collection.
    pub id: GuestId,

    /// The event this guest belongs to.
    pub event_id: EventId,

    /// Linked user account, if the guest has one.
    pub user_id: Option<UserId>,

    /// Display name.
    pub name: String,

    /// Number of additional people this guest may bring.
    pub plus_ones_allowed: u32,

    /// Size of the guest's party.
    pub group_size: u32,

    /// Whether the guest has been admitted at the door.
    pub checked_in: bool,

    /// When the check-in happened.
    pub checked_in_at: Option<DateTime<Utc>>,

    /// The guard who performed the check-in.
    pub checked_in_by: Option<GuardId>,

    /// Unique invitation token presented at the door.
    pub qr_code: String,

    /// Invitation status.
    pub invite_status: InviteStatus,

    /// Free-text note from the organizer.
    pub note: Option<String>,
}

/// Raw input for registering a guest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuestDraft {
    pub name: String,
    #[serde(default)]
    pub plus_ones_allowed: i32,
    #[serde(default)]
    pub group_size: i32,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl GuestDraft {
    /// Creates a draft for a single named guest.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group_size: 1,
            ..Self::default()
        }
    }
}

impl Guest {
    /// Validates a draft and builds a pending guest for `event_id`.
    ///
    /// The guest starts not checked in, with a fresh invitation token and
    /// `Pending` invite status. Performs no I/O.
    pub fn admit(
        id: GuestId,
        event_id: EventId,
        draft: &GuestDraft,
    ) -> Result<Self, ValidationError> {
        if draft.name.trim().is_empty() {
            return Err(ValidationError::Blank {
                field: "guest name",
            });
        }
        if draft.plus_ones_allowed < 0 {
            return Err(ValidationError::Negative {
                field: "plus-ones allowed",
                value: i64::from(draft.plus_ones_allowed),
            });
        }
        if draft.group_size < 0 {
            return Err(ValidationError::Negative {
                field: "group size",
                value: i64::from(draft.group_size),
            });
        }
        let user_id = draft
            .user_id
            .as_deref()
            .map(UserId::parse)
            .transpose()?;

        Ok(Self {
            id,
            event_id,
            user_id,
            name: draft.name.clone(),
            plus_ones_allowed: draft.plus_ones_allowed as u32,
            group_size: draft.group_size as u32,
            checked_in: false,
            checked_in_at: None,
            checked_in_by: None,
            qr_code: Uuid::new_v4().to_string(),
            invite_status: InviteStatus::Pending,
            note: draft.note.clone(),
        })
    }

    /// Performs the pending → checked-in transition.
    ///
    /// One-directional: there is no un-check-in.
    pub fn check_in(&mut self, guard: GuardId, at: DateTime<Utc>) {
        self.checked_in = true;
        self.checked_in_at = Some(at);
        self.checked_in_by = Some(guard);
    }

    /// Whether the guest has already been admitted.
    pub fn is_checked_in(&self) -> bool {
        self.checked_in
    }
}
