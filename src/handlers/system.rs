use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::server::AppState;

/// GET / - service name, version and endpoint overview
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Expense Tracker API",
        "version": version,
        "endpoints": {
            "categories": "/categories[/:id]",
            "expenses": "/expenses[/:id]",
            "expenses_by_category": "/expenses/category/:category",
            "expense_categories": "/expenses/categories",
            "health": "/health",
        },
        "prefix": "all resource routes are also served under /api"
    }))
}

/// GET /health - store connectivity probe
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    let checked = match state.categories.health_check().await {
        Ok(()) => state.expenses.health_check().await,
        Err(e) => Err(e),
    };

    match checked {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                })),
            )
        }
    }
}
