//! Document store abstraction for the event check-in system.
//!
//! The backend is modeled as a black-box document database: named
//! collections of JSON documents keyed by string identifiers. Guests live
//! in a per-event subcollection (`events/{eventId}/guests`), events in the
//! top-level `events` collection.
//!
//! Two implementations are provided:
//! - [`InMemoryDocumentStore`] for tests and default wiring
//! - [`PostgresDocumentStore`] backed by a single jsonb table

pub mod document;
pub mod error;
pub mod memory;
pub mod path;
pub mod postgres;
pub mod store;

pub use document::Document;
pub use error::{Result, StoreError};
pub use memory::InMemoryDocumentStore;
pub use path::CollectionPath;
pub use postgres::PostgresDocumentStore;
pub use store::{DocumentStore, DocumentStoreExt};
