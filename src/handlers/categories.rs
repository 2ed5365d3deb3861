use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::api::{CategoryDto, CategoryPayload};
use crate::error::{ApiError, ApiResult};
use crate::server::AppState;
use crate::services::ServiceError;

/// GET /categories
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<CategoryDto>>> {
    Ok(Json(state.categories.list_all().await?))
}

/// POST /categories
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CategoryPayload>, JsonRejection>,
) -> ApiResult<Json<CategoryDto>> {
    let Json(payload) = payload?;
    Ok(Json(state.categories.create(&payload.name).await?))
}

/// GET /categories/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<CategoryDto>> {
    state
        .categories
        .get_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::from(ServiceError::category_not_found(&id)))
}

/// PUT /categories/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CategoryPayload>, JsonRejection>,
) -> ApiResult<Json<CategoryDto>> {
    let Json(payload) = payload?;
    Ok(Json(state.categories.update(&id, &payload.name).await?))
}

/// DELETE /categories/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.categories.delete(&id).await?;
    Ok(StatusCode::OK)
}
