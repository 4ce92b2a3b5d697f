use axum::http::StatusCode;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::handlers::PrettyJson;
use crate::models::{CreateStage, DeleteOutcome, Stage, UpdateStage};
use crate::services::stage::not_found;
use crate::state::AppState;

// ============ Response DTOs ============

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteStageResponse {
    pub message: String,
}

// ============ Handlers ============

/// List all construction stages
#[utoipa::path(
    get,
    path = "/constructionStages",
    responses(
        (status = 200, description = "All construction stages", body = [Stage])
    ),
    tag = "Construction Stages"
)]
pub async fn list_stages(state: &AppState) -> AppResult<PrettyJson<Vec<Stage>>> {
    let stages = state.stages.list().await?;
    Ok(PrettyJson(stages))
}

/// Get a construction stage by ID
#[utoipa::path(
    get,
    path = "/constructionStages/{id}",
    params(
        ("id" = i64, Path, description = "Construction stage ID")
    ),
    responses(
        (status = 200, description = "Construction stage details", body = Stage),
        (status = 404, description = "Construction stage not found")
    ),
    tag = "Construction Stages"
)]
pub async fn get_stage(state: &AppState, id: i64) -> AppResult<PrettyJson<Stage>> {
    let stage = state.stages.get(id).await?.ok_or_else(|| not_found(id))?;
    Ok(PrettyJson(stage))
}

/// Create a construction stage
#[utoipa::path(
    post,
    path = "/constructionStages",
    request_body = CreateStage,
    responses(
        (status = 201, description = "Construction stage created", body = Stage),
        (status = 400, description = "Validation error")
    ),
    tag = "Construction Stages"
)]
pub async fn create_stage(
    state: &AppState,
    payload: CreateStage,
) -> AppResult<(StatusCode, PrettyJson<Option<Stage>>)> {
    let stage = state.stages.create(payload).await?;
    Ok((StatusCode::CREATED, PrettyJson(stage)))
}

/// Update a construction stage; absent fields keep their stored value
#[utoipa::path(
    patch,
    path = "/constructionStages/{id}",
    params(
        ("id" = i64, Path, description = "Construction stage ID")
    ),
    request_body = UpdateStage,
    responses(
        (status = 200, description = "Construction stage updated", body = Stage),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Construction stage not found")
    ),
    tag = "Construction Stages"
)]
pub async fn update_stage(
    state: &AppState,
    payload: UpdateStage,
    id: i64,
) -> AppResult<PrettyJson<Stage>> {
    let stage = state
        .stages
        .update(payload, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(PrettyJson(stage))
}

/// Delete a construction stage
#[utoipa::path(
    delete,
    path = "/constructionStages/{id}",
    params(
        ("id" = i64, Path, description = "Construction stage ID")
    ),
    responses(
        (status = 200, description = "Construction stage deleted", body = DeleteStageResponse),
        (status = 404, description = "Construction stage not found")
    ),
    tag = "Construction Stages"
)]
pub async fn delete_stage(state: &AppState, id: i64) -> AppResult<PrettyJson<DeleteStageResponse>> {
    match state.stages.delete(id).await? {
        DeleteOutcome::Deleted => Ok(PrettyJson(DeleteStageResponse {
            message: format!(
                "Construction stage with ID: {} has been deleted successfully.",
                id
            ),
        })),
        DeleteOutcome::NotFound => Err(not_found(id)),
    }
}
