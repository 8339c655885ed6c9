//! Domain layer for the event check-in system.
//!
//! This crate provides the core admission workflow:
//! - Event and Guest models built through validating factories
//! - Pure event status derivation from date comparison
//! - Repositories wrapping the document store with typed results
//! - Use cases for registration, check-in, update, delete, and listing
//! - An in-memory observable guard roster stand-in

pub mod error;
pub mod event;
pub mod guest;
pub mod roster;

pub use error::{DomainError, Result};
pub use event::{Event, EventDraft, EventRepository, EventService, EventStatus};
pub use guest::{Guest, GuestDraft, GuestRepository, GuestService, InviteStatus};
pub use roster::GuardRoster;
