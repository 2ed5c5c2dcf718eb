use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use crate::middleware::{ApiResponse, ApiResult};
use crate::services::{AuthService, LoginResponse, UserInfo};
use crate::state::AppState;

/// Login and registration share a body. Fields are optional so a missing one
/// reports `MISSING_FIELDS` instead of a deserialization error.
#[derive(Debug, Default, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl CredentialsRequest {
    fn parts(&self) -> (&str, &str) {
        (
            self.email.as_deref().unwrap_or_default(),
            self.password.as_deref().unwrap_or_default(),
        )
    }
}

fn auth_service(state: &AppState) -> AuthService {
    AuthService::new(state.pool.clone(), state.config.security.clone())
}

/// POST /auth/login - Authenticate and receive a JWT
///
/// Expected Input:
/// ```json
/// { "email": "admin@petstore.com", "password": "password123" }
/// ```
///
/// Expected Output (Success):
/// ```json
/// {
///   "success": true,
///   "data": {
///     "token": "eyJhbGciOiJIUzI1NiI...",
///     "expiresIn": 86400,
///     "user": { "id": 1, "email": "admin@petstore.com" }
///   }
/// }
/// ```
///
/// Unknown email and wrong password both answer 401 `INVALID_CREDENTIALS`.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> ApiResult<LoginResponse> {
    let Json(request) = payload?;
    let (email, password) = request.parts();

    let response = auth_service(&state).authenticate(email, password).await?;
    Ok(ApiResponse::success(response))
}

/// POST /auth/register - Create a user account
///
/// Returns 201 with `{ "id", "email" }`; a taken email answers 409 `EMAIL_TAKEN`.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> ApiResult<UserInfo> {
    let Json(request) = payload?;
    let (email, password) = request.parts();

    let user = auth_service(&state).register(email, password).await?;
    Ok(ApiResponse::created(user))
}
