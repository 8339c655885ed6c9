use async_trait::async_trait;

use crate::{CollectionPath, Document, Result};

/// Core trait for document store implementations.
///
/// A document store holds named collections of JSON documents keyed by
/// string identifiers. All implementations must be thread-safe
/// (Send + Sync). Consistency across operations is whatever the backend
/// provides; callers must not assume multi-call atomicity.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetches a single document by identifier.
    ///
    /// An absent identifier is `Ok(None)`, not an error.
    async fn get(&self, collection: &CollectionPath, id: &str) -> Result<Option<Document>>;

    /// Lists every document in a collection, in no particular order.
    async fn list(&self, collection: &CollectionPath) -> Result<Vec<Document>>;

    /// Writes a document, keyed by `document.id`.
    ///
    /// An existing document with the same identifier is replaced.
    async fn set(&self, collection: &CollectionPath, document: Document) -> Result<()>;

    /// Deletes a document by identifier.
    ///
    /// Deleting an absent identifier is an acknowledged no-op.
    async fn delete(&self, collection: &CollectionPath, id: &str) -> Result<()>;
}

/// Extension trait providing convenience methods for document stores.
#[async_trait]
pub trait DocumentStoreExt: DocumentStore {
    /// Checks whether a document exists.
    async fn exists(&self, collection: &CollectionPath, id: &str) -> Result<bool> {
        Ok(self.get(collection, id).await?.is_some())
    }

    /// Counts the documents in a collection.
    async fn count(&self, collection: &CollectionPath) -> Result<usize> {
        Ok(self.list(collection).await?.len())
    }
}

// Blanket implementation for all DocumentStore implementations
impl<T: DocumentStore + ?Sized> DocumentStoreExt for T {}
