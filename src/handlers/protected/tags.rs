use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use super::utils::require_name;
use crate::database::models::Tag;
use crate::database::service;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateTagRequest {
    pub name: Option<String>,
}

/// GET /tags
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Tag>> {
    let tags = service::list_tags(&state.pool).await?;
    Ok(ApiResponse::success(tags))
}

/// POST /tags - Create a tag (201)
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateTagRequest>, JsonRejection>,
) -> ApiResult<Tag> {
    let Json(request) = payload?;
    let name = require_name(request.name)?;

    let tag = service::create_tag(&state.pool, &name).await?;
    Ok(ApiResponse::created(tag))
}
