use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET / - Service description
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Pet Store API",
            "version": version,
            "endpoints": {
                "auth": "/auth/login, /auth/register (public), /auth/me (protected)",
                "pets": "/pets[/:id] (protected)",
                "pet_tags": "/pets/:id/tags[/:tagId] (protected)",
                "categories": "/categories (protected)",
                "tags": "/tags (protected)",
                "health": "/health (public)",
            }
        }
    }))
}

/// GET /health - Liveness plus a database ping
pub async fn health(State(state): State<AppState>) -> ApiResult<Value> {
    if let Err(e) = DatabaseManager::health_check(&state.pool).await {
        tracing::error!("Health check failed: {}", e);
        return Err(ApiError::DatabaseUnavailable);
    }

    Ok(ApiResponse::success(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
        "database": "ok"
    })))
}
