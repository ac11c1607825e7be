use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::instrument;

use crate::{
    event::{Event, EventPage},
    server::{AppState, app_error::AppError},
};

/// Page size used when the query does not name one.
const DEFAULT_LIMIT: usize = 10;

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    date_from: String,
    date_to: String,
    #[serde(default)]
    offset: usize,
    #[serde(default = "default_limit")]
    limit: usize,
}

/// Body of a create request. Absent fields are reported by the store's validation.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    start_date: Option<String>,
    end_date: Option<String>,
    title: Option<String>,
}

/// Returns one page of events lying inside the requested date range.
#[axum::debug_handler]
#[instrument(skip(state))]
pub async fn get_events(
    State(state): State<Arc<AppState>>,
    params: Result<Query<QueryParams>, QueryRejection>,
) -> Result<Json<EventPage>, AppError> {
    let Query(params) = params?;
    let page = state
        .store
        .get_events(&params.date_from, &params.date_to, params.offset, params.limit)
        .await;
    Ok(Json(page))
}

/// Creates a new event.
#[axum::debug_handler]
#[instrument(skip(state))]
pub async fn post_event(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewEvent>, JsonRejection>,
) -> Result<(StatusCode, Json<Event>), AppError> {
    let Json(new_event) = body?;
    let event = state
        .store
        .create_event(
            new_event.start_date.as_deref().unwrap_or_default(),
            new_event.end_date.as_deref().unwrap_or_default(),
            new_event.title.as_deref().unwrap_or_default(),
        )
        .await
        .map_err(AppError::from)?;
    Ok((StatusCode::CREATED, Json(event)))
}

#[axum::debug_handler]
#[instrument(skip(state))]
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Event>, AppError> {
    let event = state.store.get_event(&id).await.map_err(AppError::from)?;
    Ok(Json(event))
}

/// Removes an event and echoes its id.
#[axum::debug_handler]
#[instrument(skip(state))]
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<String>, AppError> {
    let id = state.store.remove_event(&id).await.map_err(AppError::from)?;
    Ok(Json(id))
}
