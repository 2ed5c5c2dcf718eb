// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::auth::AuthError;
use crate::database::{DatabaseError, RepositoryError};
use crate::services::auth_service::AuthServiceError;

/// HTTP API error with status code, stable error code and client-safe message
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    MissingFields(String),
    InvalidStatus,
    InvalidJson(String),
    InvalidId(String),

    // 401 Unauthorized
    NoToken,
    InvalidCredentials,

    // 403 Forbidden
    InvalidToken,

    // 404 Not Found
    PetNotFound,
    CategoryNotFound,
    TagNotFound,

    // 409 Conflict
    EmailTaken,

    // 500 Internal Server Error; the detail is logged, never returned
    Internal(String),

    // 503 Service Unavailable
    DatabaseUnavailable,
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields(_)
            | ApiError::InvalidStatus
            | ApiError::InvalidJson(_)
            | ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::NoToken | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::InvalidToken => StatusCode::FORBIDDEN,
            ApiError::PetNotFound | ApiError::CategoryNotFound | ApiError::TagNotFound => {
                StatusCode::NOT_FOUND
            }
            ApiError::EmailTaken => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::DatabaseUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::MissingFields(msg) => msg,
            ApiError::InvalidStatus => "Status must be one of: available, pending, sold",
            ApiError::InvalidJson(msg) => msg,
            ApiError::InvalidId(msg) => msg,
            ApiError::NoToken => "Access token required",
            ApiError::InvalidCredentials => "Invalid email or password",
            ApiError::InvalidToken => "Invalid or expired token",
            ApiError::PetNotFound => "Pet not found",
            ApiError::CategoryNotFound => "Category not found",
            ApiError::TagNotFound => "Tag not found",
            ApiError::EmailTaken => "Email is already registered",
            ApiError::Internal(_) => "Internal server error",
            ApiError::DatabaseUnavailable => "Database unavailable",
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::MissingFields(_) => "MISSING_FIELDS",
            ApiError::InvalidStatus => "INVALID_STATUS",
            ApiError::InvalidJson(_) => "INVALID_JSON",
            ApiError::InvalidId(_) => "INVALID_ID",
            ApiError::NoToken => "NO_TOKEN",
            ApiError::InvalidCredentials => "INVALID_CREDENTIALS",
            ApiError::InvalidToken => "INVALID_TOKEN",
            ApiError::PetNotFound => "PET_NOT_FOUND",
            ApiError::CategoryNotFound => "CATEGORY_NOT_FOUND",
            ApiError::TagNotFound => "TAG_NOT_FOUND",
            ApiError::EmailTaken => "EMAIL_TAKEN",
            ApiError::Internal(_) => "INTERNAL_ERROR",
            ApiError::DatabaseUnavailable => "DATABASE_UNAVAILABLE",
        }
    }

    /// Convert to the failure envelope
    pub fn to_json(&self) -> Value {
        json!({
            "success": false,
            "error": {
                "message": self.message(),
                "code": self.error_code()
            }
        })
    }
}

impl ApiError {
    pub fn missing_fields(message: impl Into<String>) -> Self {
        ApiError::MissingFields(message.into())
    }

    pub fn invalid_json(message: impl Into<String>) -> Self {
        ApiError::InvalidJson(message.into())
    }

    pub fn invalid_id(raw: &str) -> Self {
        ApiError::InvalidId(format!("Invalid id: {}", raw))
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        ApiError::Internal(detail.into())
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        // Don't expose internal SQL errors to clients
        tracing::error!("Database error: {}", err);
        ApiError::internal(err.to_string())
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::PetNotFound(_) => ApiError::PetNotFound,
            RepositoryError::CategoryNotFound(_) => ApiError::CategoryNotFound,
            RepositoryError::TagNotFound(_) => ApiError::TagNotFound,
            RepositoryError::InvalidStatus(_) => ApiError::InvalidStatus,
            RepositoryError::Database(e) => e.into(),
        }
    }
}

impl From<AuthServiceError> for ApiError {
    fn from(err: AuthServiceError) -> Self {
        match err {
            AuthServiceError::MissingFields => ApiError::missing_fields("Email and password are required"),
            AuthServiceError::InvalidCredentials => ApiError::InvalidCredentials,
            AuthServiceError::EmailTaken => ApiError::EmailTaken,
            AuthServiceError::Database(e) => e.into(),
            AuthServiceError::Auth(e) => e.into(),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        tracing::error!("Auth error: {}", err);
        ApiError::internal(err.to_string())
    }
}

impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        ApiError::invalid_json(rejection.body_text())
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
