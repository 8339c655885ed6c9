//! Shared types for the event check-in system.
//!
//! This crate provides the identifier newtypes and validated value objects
//! used across the workspace:
//! - String-backed identifiers for events, guests, guards, and users
//! - The `Email` value object with factory validation
//! - `ValidationError` for pre-I/O input rejection

pub mod error;
pub mod types;

pub use error::ValidationError;
pub use types::{Email, EventId, GuardId, GuestId, UserId};
