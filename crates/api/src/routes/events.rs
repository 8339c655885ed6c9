//! Event management endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use doc_store::DocumentStore;
use domain::{Event, EventDraft};
use serde::Deserialize;

use crate::error::ApiError;

use super::AppState;

// -- Request types --

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub owner_id: String,
    pub name: String,
    pub starts_at: DateTime<Utc>,
    pub location: String,
    pub capacity: i32,
    #[serde(default)]
    pub guard_mode: bool,
}

#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub owner: String,
}

#[derive(Deserialize)]
pub struct GuardModeRequest {
    pub enabled: bool,
}

// -- Handlers --

/// POST /events — create an event.
#[tracing::instrument(skip(state, req))]
pub async fn create<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Json(req): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let draft = EventDraft {
        name: req.name,
        starts_at: req.starts_at,
        location: req.location,
        capacity: req.capacity,
        guard_mode: req.guard_mode,
    };
    let event = state.events.create(&req.owner_id, &draft).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /events/{id} — fetch an event with its derived status.
#[tracing::instrument(skip(state))]
pub async fn get<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<Event>, ApiError> {
    Ok(Json(state.events.get(&id).await?))
}

/// GET /events?owner= — list an organizer's events.
#[tracing::instrument(skip(state))]
pub async fn list<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Vec<Event>>, ApiError> {
    Ok(Json(state.events.list_for_owner(&query.owner).await?))
}

/// POST /events/{id}/cancel — cancel an event (sticky).
#[tracing::instrument(skip(state))]
pub async fn cancel<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<Event>, ApiError> {
    Ok(Json(state.events.cancel(&id).await?))
}

/// POST /events/{id}/guard-mode — toggle guard-mode scanning.
#[tracing::instrument(skip(state, req))]
pub async fn guard_mode<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    Json(req): Json<GuardModeRequest>,
) -> Result<Json<Event>, ApiError> {
    Ok(Json(state.events.set_guard_mode(&id, req.enabled).await?))
}
