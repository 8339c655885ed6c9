use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    CollectionPath, Document, Result,
    store::DocumentStore,
};

/// In-memory document store implementation for testing and default wiring.
///
/// Stores collections as maps guarded by a single RwLock and provides the
/// same interface as the PostgreSQL implementation.
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, BTreeMap<String, Document>>>>,
}

impl InMemoryDocumentStore {
    /// Creates a new empty in-memory document store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of documents in a collection.
    pub async fn document_count(&self, collection: &CollectionPath) -> usize {
        self.collections
            .read()
            .await
            .get(collection.as_str())
            .map_or(0, BTreeMap::len)
    }

    /// Clears every collection.
    pub async fn clear(&self) {
        self.collections.write().await.clear();
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, collection: &CollectionPath, id: &str) -> Result<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection.as_str())
            .and_then(|docs| docs.get(id))
            .cloned())
    }

    async fn list(&self, collection: &CollectionPath) -> Result<Vec<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection.as_str())
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn set(&self, collection: &CollectionPath, document: Document) -> Result<()> {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.as_str().to_string())
            .or_default()
            .insert(document.id.clone(), document);
        Ok(())
    }

    async fn delete(&self, collection: &CollectionPath, id: &str) -> Result<()> {
        let mut collections = self.collections.write().await;
        if let Some(docs) = collections.get_mut(collection.as_str()) {
            docs.remove(id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DocumentStoreExt;

    fn doc(id: &str, label: &str) -> Document {
        Document::new(id, serde_json::json!({ "label": label }))
    }

    #[tokio::test]
    async fn set_then_get_returns_the_document() {
        let store = InMemoryDocumentStore::new();
        let collection = CollectionPath::events();

        store.set(&collection, doc("e-1", "launch")).await.unwrap();

        let fetched = store.get(&collection, "e-1").await.unwrap();
        assert_eq!(fetched, Some(doc("e-1", "launch")));
    }

    #[tokio::test]
    async fn get_missing_document_is_none() {
        let store = InMemoryDocumentStore::new();
        let collection = CollectionPath::events();

        let fetched = store.get(&collection, "nope").await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn set_replaces_existing_document() {
        let store = InMemoryDocumentStore::new();
        let collection = CollectionPath::events();

        store.set(&collection, doc("e-1", "draft")).await.unwrap();
        store.set(&collection, doc("e-1", "final")).await.unwrap();

        let fetched = store.get(&collection, "e-1").await.unwrap().unwrap();
        assert_eq!(fetched.fields["label"], "final");
        assert_eq!(store.document_count(&collection).await, 1);
    }

    #[tokio::test]
    async fn list_returns_full_collection() {
        let store = InMemoryDocumentStore::new();
        let collection = CollectionPath::guests_of("evt-1");

        store.set(&collection, doc("g-1", "ada")).await.unwrap();
        store.set(&collection, doc("g-2", "grace")).await.unwrap();
        store.set(&collection, doc("g-3", "edsger")).await.unwrap();

        let docs = store.list(&collection).await.unwrap();
        assert_eq!(docs.len(), 3);
    }

    #[tokio::test]
    async fn list_empty_collection_is_empty() {
        let store = InMemoryDocumentStore::new();
        let docs = store.list(&CollectionPath::events()).await.unwrap();
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn collections_do_not_leak_into_each_other() {
        let store = InMemoryDocumentStore::new();
        let first = CollectionPath::guests_of("evt-1");
        let second = CollectionPath::guests_of("evt-2");

        store.set(&first, doc("g-1", "ada")).await.unwrap();

        assert_eq!(store.document_count(&first).await, 1);
        assert_eq!(store.document_count(&second).await, 0);
        assert!(store.list(&second).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_the_document() {
        let store = InMemoryDocumentStore::new();
        let collection = CollectionPath::events();

        store.set(&collection, doc("e-1", "launch")).await.unwrap();
        store.delete(&collection, "e-1").await.unwrap();

        assert!(store.get(&collection, "e-1").await.unwrap().is_none());
        assert_eq!(store.document_count(&collection).await, 0);
    }

    #[tokio::test]
    async fn delete_missing_document_is_acknowledged() {
        let store = InMemoryDocumentStore::new();
        let collection = CollectionPath::events();

        assert!(store.delete(&collection, "ghost").await.is_ok());
    }

    #[tokio::test]
    async fn ext_exists_and_count() {
        let store = InMemoryDocumentStore::new();
        let collection = CollectionPath::guests_of("evt-1");

        assert!(!store.exists(&collection, "g-1").await.unwrap());
        assert_eq!(store.count(&collection).await.unwrap(), 0);

        store.set(&collection, doc("g-1", "ada")).await.unwrap();

        assert!(store.exists(&collection, "g-1").await.unwrap());
        assert_eq!(store.count(&collection).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn clear_empties_every_collection() {
        let store = InMemoryDocumentStore::new();
        store
            .set(&CollectionPath::events(), doc("e-1", "launch"))
            .await
            .unwrap();
        store
            .set(&CollectionPath::guests_of("e-1"), doc("g-1", "ada"))
            .await
            .unwrap();

        store.clear().await;

        assert_eq!(store.document_count(&CollectionPath::events()).await, 0);
        assert_eq!(
            store.document_count(&CollectionPath::guests_of("e-1")).await,
            0
        );
    }
}
