//! PostgreSQL integration tests
//!
//! These tests use a shared PostgreSQL container for efficiency.
//! Run with:
//!
//! ```bash
//! cargo test -p doc-store --test postgres_integration -- --test-threads=1
//! ```

use std::sync::Arc;

use doc_store::{
    CollectionPath, Document, DocumentStore, DocumentStoreExt, PostgresDocumentStore,
};
use sqlx::PgPool;
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

/// Shared container info - container stays alive for all tests
struct ContainerInfo {
    #[allow(dead_code)] // Container must stay alive for tests
    container: ContainerAsync<Postgres>,
    connection_string: String,
}

/// Global shared container
static CONTAINER: OnceCell<Arc<ContainerInfo>> = OnceCell::const_new();

async fn get_container_info() -> Arc<ContainerInfo> {
    CONTAINER
        .get_or_init(|| async {
            let container = Postgres::default().start().await.unwrap();

            let host = container.get_host().await.unwrap();
            let port = container.get_host_port_ipv4(5432).await.unwrap();

            let connection_string =
                format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

            // Create a temporary pool just for the schema
            let temp_pool = PgPool::connect(&connection_string).await.unwrap();

            sqlx::raw_sql(include_str!(
                "../../../migrations/001_create_documents_table.sql"
            ))
            .execute(&temp_pool)
            .await
            .unwrap();

            temp_pool.close().await;

            Arc::new(ContainerInfo {
                container,
                connection_string,
            })
        })
        .await
        .clone()
}

/// Get a fresh store with its own pool and a cleared table
async fn get_test_store() -> PostgresDocumentStore {
    let info = get_container_info().await;

    // Create a fresh pool for each test to avoid connection issues
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&info.connection_string)
        .await
        .unwrap();

    // Clear the table for test isolation
    sqlx::query("TRUNCATE TABLE documents")
        .execute(&pool)
        .await
        .unwrap();

    PostgresDocumentStore::new(pool)
}

fn guest_doc(id: &str, name: &str, checked_in: bool) -> Document {
    Document::new(
        id,
        serde_json::json!({
            "name": name,
            "checkedIn": checked_in,
        }),
    )
}

#[tokio::test]
async fn set_then_get_round_trips() {
    let store = get_test_store().await;
    let collection = CollectionPath::guests_of("evt-1");

    let doc = guest_doc("g-1", "Ada", false);
    store.set(&collection, doc.clone()).await.unwrap();

    let fetched = store.get(&collection, "g-1").await.unwrap();
    assert_eq!(fetched, Some(doc));
}

#[tokio::test]
async fn get_missing_document_is_none() {
    let store = get_test_store().await;
    let collection = CollectionPath::events();

    let fetched = store.get(&collection, "nope").await.unwrap();
    assert!(fetched.is_none());
}

#[tokio::test]
async fn set_upserts_existing_document() {
    let store = get_test_store().await;
    let collection = CollectionPath::guests_of("evt-1");

    store
        .set(&collection, guest_doc("g-1", "Ada", false))
        .await
        .unwrap();
    store
        .set(&collection, guest_doc("g-1", "Ada", true))
        .await
        .unwrap();

    let fetched = store.get(&collection, "g-1").await.unwrap().unwrap();
    assert_eq!(fetched.fields["checkedIn"], true);
    assert_eq!(store.count(&collection).await.unwrap(), 1);
}

#[tokio::test]
async fn list_returns_only_the_requested_collection() {
    let store = get_test_store().await;
    let first = CollectionPath::guests_of("evt-1");
    let second = CollectionPath::guests_of("evt-2");

    store
        .set(&first, guest_doc("g-1", "Ada", false))
        .await
        .unwrap();
    store
        .set(&first, guest_doc("g-2", "Grace", false))
        .await
        .unwrap();
    store
        .set(&second, guest_doc("g-3", "Edsger", false))
        .await
        .unwrap();

    let docs = store.list(&first).await.unwrap();
    assert_eq!(docs.len(), 2);

    let docs = store.list(&second).await.unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id, "g-3");
}

#[tokio::test]
async fn delete_removes_the_document() {
    let store = get_test_store().await;
    let collection = CollectionPath::guests_of("evt-1");

    store
        .set(&collection, guest_doc("g-1", "Ada", false))
        .await
        .unwrap();
    store.delete(&collection, "g-1").await.unwrap();

    assert!(!store.exists(&collection, "g-1").await.unwrap());
}

#[tokio::test]
async fn delete_missing_document_is_acknowledged() {
    let store = get_test_store().await;
    let collection = CollectionPath::events();

    assert!(store.delete(&collection, "ghost").await.is_ok());
}

#[tokio::test]
async fn same_id_in_different_collections_is_distinct() {
    let store = get_test_store().await;
    let first = CollectionPath::guests_of("evt-1");
    let second = CollectionPath::guests_of("evt-2");

    store
        .set(&first, guest_doc("g-1", "Ada", false))
        .await
        .unwrap();
    store
        .set(&second, guest_doc("g-1", "Grace", true))
        .await
        .unwrap();

    let a = store.get(&first, "g-1").await.unwrap().unwrap();
    let b = store.get(&second, "g-1").await.unwrap().unwrap();
    assert_eq!(a.fields["name"], "Ada");
    assert_eq!(b.fields["name"], "Grace");
}
