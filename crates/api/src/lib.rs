//! HTTP API server with observability for the event check-in system.
//!
//! Provides REST endpoints for event management and guest admission, with
//! structured logging (tracing) and Prometheus metrics. The router is
//! generic over the document store so tests run against the in-memory
//! implementation and production wiring can use PostgreSQL.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post, put};
use doc_store::DocumentStore;
use domain::{EventService, GuestService};
use metrics_exporter_prometheus::PrometheusHandle;
use session::StaticFlags;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: DocumentStore + Clone + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/events", post(routes::events::create::<S>))
        .route("/events", get(routes::events::list::<S>))
        .route("/events/{id}", get(routes::events::get::<S>))
        .route("/events/{id}/cancel", post(routes::events::cancel::<S>))
        .route(
            "/events/{id}/guard-mode",
            post(routes::events::guard_mode::<S>),
        )
        .route("/events/{id}/guests", post(routes::guests::register::<S>))
        .route("/events/{id}/guests", get(routes::guests::list::<S>))
        .route(
            "/events/{id}/guests/{guest_id}",
            put(routes::guests::update::<S>),
        )
        .route(
            "/events/{id}/guests/{guest_id}",
            delete(routes::guests::remove::<S>),
        )
        .route(
            "/events/{id}/guests/{guest_id}/check-in",
            post(routes::guests::check_in::<S>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state over the given store.
///
/// Returns the flag handle alongside the state so callers (and tests) can
/// flip maintenance mode.
pub fn create_default_state<S: DocumentStore + Clone + 'static>(
    store: S,
) -> (Arc<AppState<S>>, StaticFlags) {
    let flags = StaticFlags::new();
    let state = Arc::new(AppState {
        events: EventService::new(store.clone()),
        guests: GuestService::new(store),
        flags: Arc::new(flags.clone()),
    });
    (state, flags)
}
