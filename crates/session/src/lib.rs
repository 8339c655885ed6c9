//! Session state and remote flags for the event check-in system.
//!
//! Two small collaborator seams the rest of the workspace depends on:
//! - [`SessionStore`], an observable cell holding the signed-in user
//! - [`FlagService`], the fetch-on-demand remote flag interface

pub mod flags;
pub mod store;

pub use flags::{FlagError, FlagService, StaticFlags};
pub use store::{SessionStore, SessionUser};
