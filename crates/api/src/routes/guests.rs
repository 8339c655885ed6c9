//! Guest admission endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use doc_store::DocumentStore;
use domain::{Guest, GuestDraft};
use serde::Deserialize;

use crate::error::ApiError;

use super::AppState;

// -- Request types --

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterGuestRequest {
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

impl RegisterGuestRequest {
    fn into_draft(self) -> GuestDraft {
        GuestDraft {
            name: self.name,
            plus_ones_allowed: self.plus_ones_allowed,
            group_size: self.group_size,
            user_id: self.user_id,
            note: self.note,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    pub guard_id: String,
}

// -- Handlers --

/// POST /events/{id}/guests — register a guest.
#[tracing::instrument(skip(state, req))]
pub async fn register<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(event_id): Path<String>,
    Json(req): Json<RegisterGuestRequest>,
) -> Result<(StatusCode, Json<Guest>), ApiError> {
    state.require_not_in_maintenance().await?;
    let guest = state
        .guests
        .register(&event_id, &req.into_draft())
        .await?;
    Ok((StatusCode::CREATED, Json(guest)))
}

/// GET /events/{id}/guests — list the event's guests.
#[tracing::instrument(skip(state))]
pub async fn list<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(event_id): Path<String>,
) -> Result<Json<Vec<Guest>>, ApiError> {
    Ok(Json(state.guests.list(&event_id).await?))
}

/// PUT /events/{id}/guests/{guest_id} — overwrite a guest record.
#[tracing::instrument(skip(state, guest))]
pub async fn update<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path((event_id, guest_id)): Path<(String, String)>,
    Json(guest): Json<Guest>,
) -> Result<Json<Guest>, ApiError> {
    state.require_not_in_maintenance().await?;
    Ok(Json(
        state.guests.update(&event_id, &guest_id, guest).await?,
    ))
}

/// DELETE /events/{id}/guests/{guest_id} — remove a guest.
#[tracing::instrument(skip(state))]
pub async fn remove<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path((event_id, guest_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state.require_not_in_maintenance().await?;
    state.guests.remove(&event_id, &guest_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /events/{id}/guests/{guest_id}/check-in — admit a guest at the door.
#[tracing::instrument(skip(state, req))]
pub async fn check_in<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path((event_id, guest_id)): Path<(String, String)>,
    Json(req): Json<CheckInRequest>,
) -> Result<Json<Guest>, ApiError> {
    state.require_not_in_maintenance().await?;
    Ok(Json(
        state
            .guests
            .check_in(&event_id, &guest_id, &req.guard_id)
            .await?,
    ))
}
