use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use super::utils::require_name;
use crate::database::models::Category;
use crate::database::service;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
}

/// GET /categories
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Category>> {
    let categories = service::list_categories(&state.pool).await?;
    Ok(ApiResponse::success(categories))
}

/// POST /categories - Create a category (201)
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> ApiResult<Category> {
    let Json(request) = payload?;
    let name = require_name(request.name)?;

    let category = service::create_category(&state.pool, &name).await?;
    Ok(ApiResponse::created(category))
}
