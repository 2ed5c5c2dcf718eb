use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::utils::parse_id;
use crate::database::models::{Pet, PetStatus};
use crate::database::{NewPet, PetChanges};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePetRequest {
    pub name: Option<String>,
    pub status: Option<Value>,
    pub category_id: Option<i32>,
    pub photo_urls: Option<Vec<String>>,
}

impl CreatePetRequest {
    /// Presence first, then status. Both checks run before any database work.
    pub fn validate(self) -> Result<NewPet, ApiError> {
        let status = self.status.map(status_text);
        let (name, status, category_id) = match (self.name, status, self.category_id) {
            (Some(name), Some(status), Some(category_id)) if !name.is_empty() && !status.is_empty() => {
                (name, status, category_id)
            }
            _ => return Err(ApiError::missing_fields("Name, status, and categoryId are required")),
        };

        let status = status.parse::<PetStatus>().map_err(|_| ApiError::InvalidStatus)?;

        Ok(NewPet {
            name,
            status,
            category_id,
            photo_urls: self.photo_urls.unwrap_or_default(),
        })
    }
}

/// Partial update body. An absent key stays `None` and leaves the column
/// alone; any present value, even `""` or `[]`, is written. Status is checked
/// by the repository once the pet is known to exist.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePetRequest {
    pub name: Option<String>,
    pub status: Option<Value>,
    pub category_id: Option<i32>,
    pub photo_urls: Option<Vec<String>>,
}

impl UpdatePetRequest {
    pub fn into_changes(self) -> PetChanges {
        PetChanges {
            name: self.name,
            status: self.status.map(status_text),
            category_id: self.category_id,
            photo_urls: self.photo_urls,
        }
    }
}

/// Status as text. Non-string JSON keeps its literal form, which never names
/// a valid status.
fn status_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachTagRequest {
    pub tag_id: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct DeleteConfirmation {
    pub message: &'static str,
    pub id: i32,
}

/// GET /pets - All pets, newest first, with category and tags
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Pet>> {
    let pets = state.pets().list().await?;
    Ok(ApiResponse::success(pets))
}

/// GET /pets/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Pet> {
    let id = parse_id(&id)?;

    let pet = state.pets().find(id).await?.ok_or(ApiError::PetNotFound)?;
    Ok(ApiResponse::success(pet))
}

/// POST /pets - Create a pet (201). Tags are attached separately.
///
/// Expected Input:
/// ```json
/// { "name": "Max", "status": "available", "categoryId": 1, "photoUrls": [] }
/// ```
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<CreatePetRequest>, JsonRejection>,
) -> ApiResult<Pet> {
    let Json(request) = payload?;
    let new_pet = request.validate()?;

    let pet = state.pets().create(new_pet).await?;

    tracing::info!("User {} created pet {}", user.id, pet.id);
    Ok(ApiResponse::created(pet))
}

/// PUT /pets/:id - Partial update
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePetRequest>, JsonRejection>,
) -> ApiResult<Pet> {
    let id = parse_id(&id)?;
    let Json(request) = payload?;

    let pet = state.pets().update(id, request.into_changes()).await?;

    tracing::info!("User {} updated pet {}", user.id, pet.id);
    Ok(ApiResponse::success(pet))
}

/// DELETE /pets/:id - Remove a pet and its tag associations
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<DeleteConfirmation> {
    let id = parse_id(&id)?;

    let deleted = state.pets().delete(id).await?;

    tracing::info!("User {} deleted pet {}", user.id, deleted);
    Ok(ApiResponse::success(DeleteConfirmation {
        message: "Pet deleted successfully",
        id: deleted,
    }))
}

/// POST /pets/:id/tags - Associate an existing tag
///
/// Expected Input:
/// ```json
/// { "tagId": 2 }
/// ```
pub async fn attach_tag(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AttachTagRequest>, JsonRejection>,
) -> ApiResult<Pet> {
    let id = parse_id(&id)?;
    let Json(request) = payload?;
    let tag_id = request
        .tag_id
        .ok_or_else(|| ApiError::missing_fields("tagId is required"))?;

    let pet = state.pets().attach_tag(id, tag_id).await?;
    Ok(ApiResponse::success(pet))
}

/// DELETE /pets/:id/tags/:tagId - Remove an association, keeping the tag
pub async fn detach_tag(
    State(state): State<AppState>,
    Path((id, tag_id)): Path<(String, String)>,
) -> ApiResult<Pet> {
    let id = parse_id(&id)?;
    let tag_id = parse_id(&tag_id)?;

    let pet = state.pets().detach_tag(id, tag_id).await?;
    Ok(ApiResponse::success(pet))
}
