//! Event endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::types::{CreateEventRequest, Event};

/// POST /api/events - Create an event
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let Json(request) = payload?;
    let event = state.events.create_event(request).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /api/events - List all events in creation order
pub async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let events = state.events.list_events().await?;
    Ok(Json(events))
}
