use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::api::{ExpenseDto, ExpenseUpdate, NewExpense};
use crate::error::ApiResult;
use crate::server::AppState;

/// GET /expenses
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<ExpenseDto>>> {
    Ok(Json(state.expenses.list_all().await?))
}

/// POST /expenses
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewExpense>, JsonRejection>,
) -> ApiResult<Json<ExpenseDto>> {
    let Json(payload) = payload?;
    Ok(Json(state.expenses.create(payload).await?))
}

/// GET /expenses/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ExpenseDto>> {
    Ok(Json(state.expenses.get_by_id(&id).await?))
}

/// PUT /expenses/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ExpenseUpdate>, JsonRejection>,
) -> ApiResult<Json<ExpenseDto>> {
    let Json(payload) = payload?;
    Ok(Json(state.expenses.update(&id, payload).await?))
}

/// DELETE /expenses/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.expenses.delete(&id).await?;
    Ok(StatusCode::OK)
}

/// GET /expenses/category/:category
pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> ApiResult<Json<Vec<ExpenseDto>>> {
    Ok(Json(state.expenses.list_by_category(&category).await?))
}

/// GET /expenses/categories
pub async fn distinct_categories(State(state): State<AppState>) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(state.expenses.distinct_categories().await?))
}
