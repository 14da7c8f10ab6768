//! Generic CRUD handlers, instantiated once per record type.
//!
//! Each handler performs exactly one repository call; the repository
//! provides atomicity, so handlers never lock anything themselves.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::info;

use recordhub_core::Record;

use crate::dto::response::{DeletedResponse, RecordMessage};
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::state::ResourceState;

/// GET /{collection}
pub async fn list_records<R: Record>(State(state): State<ResourceState<R>>) -> Json<Vec<R>> {
    Json(state.repo.list())
}

/// GET /{collection}/{id}
pub async fn get_record<R: Record>(
    State(state): State<ResourceState<R>>,
    Path(id): Path<String>,
) -> Result<Json<R>, ApiError> {
    state
        .repo
        .get(&id)
        .map(Json)
        .ok_or_else(ApiError::record_not_found::<R>)
}

/// POST /{collection}
pub async fn create_record<R: Record>(
    State(state): State<ResourceState<R>>,
    JsonBody(record): JsonBody<R>,
) -> (StatusCode, Json<RecordMessage<R>>) {
    let created = state.repo.create(record);
    info!(collection = R::COLLECTION, id = created.id(), "Record created");

    (StatusCode::CREATED, Json(RecordMessage::created(created)))
}

/// PUT /{collection}/{id}
pub async fn update_record<R: Record>(
    State(state): State<ResourceState<R>>,
    Path(id): Path<String>,
    JsonBody(record): JsonBody<R>,
) -> Result<Json<RecordMessage<R>>, ApiError> {
    let updated = state
        .repo
        .update(&id, record)
        .ok_or_else(ApiError::record_not_found::<R>)?;
    info!(collection = R::COLLECTION, id = %id, "Record updated");

    Ok(Json(RecordMessage::updated(updated)))
}

/// DELETE /{collection}/{id}
pub async fn delete_record<R: Record>(
    State(state): State<ResourceState<R>>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let removed = state
        .repo
        .delete(&id)
        .ok_or_else(ApiError::record_not_found::<R>)?;
    info!(collection = R::COLLECTION, id = %removed, "Record deleted");

    Ok(Json(DeletedResponse::new::<R>(removed)))
}
