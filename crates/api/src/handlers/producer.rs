//! Handlers for the `/producers` resource.

use agro_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use agro_core::producer::display::{ProducerPageView, ProducerView};
use agro_core::producer::{CreateProducer, DeleteConfirmation, UpdateProducer};
use agro_core::types::DbId;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// Turn a JSON extraction failure into the API's error envelope.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(input)| input)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Same as [`json_body`] for the `{id}` path segment.
fn path_id(id: Result<Path<DbId>, PathRejection>) -> AppResult<DbId> {
    id.map(|Path(id)| id)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// POST /api/v1/producers
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateProducer>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ProducerView>)> {
    let input = json_body(payload)?;
    let producer = state.producers().create(input).await?;
    Ok((StatusCode::CREATED, Json(producer.into())))
}

/// GET /api/v1/producers
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> AppResult<Json<ProducerPageView>> {
    let Query(params) =
        params.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let offset = clamp_offset(params.offset);
    let page = state.producers().list(offset, limit).await?;
    Ok(Json(page.into()))
}

/// GET /api/v1/producers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<ProducerView>> {
    let id = path_id(id)?;
    let producer = state.producers().get(id).await?;
    Ok(Json(producer.into()))
}

/// PUT /api/v1/producers/{id}
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<UpdateProducer>, JsonRejection>,
) -> AppResult<Json<ProducerView>> {
    let id = path_id(id)?;
    let input = json_body(payload)?;
    let producer = state.producers().update(id, input).await?;
    Ok(Json(producer.into()))
}

/// DELETE /api/v1/producers/{id}
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<DeleteConfirmation>> {
    let id = path_id(id)?;
    let confirmation = state.producers().delete(id).await?;
    Ok(Json(confirmation))
}
