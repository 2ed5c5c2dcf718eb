use axum::Extension;

use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// GET /auth/me - Identity carried by the presented token
///
/// Answers from the token alone; the user row is not re-read.
pub async fn whoami(Extension(user): Extension<AuthUser>) -> ApiResult<AuthUser> {
    Ok(ApiResponse::success(user))
}
