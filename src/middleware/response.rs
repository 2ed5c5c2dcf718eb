use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::json;

use crate::error::ApiError;

/// Wrapper for API responses that automatically adds the success envelope
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub status_code: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful API response with default 200 status
    pub fn success(data: T) -> Self {
        Self {
            data,
            status_code: StatusCode::OK,
        }
    }

    /// Create a 201 Created response
    pub fn created(data: T) -> Self {
        Self {
            data,
            status_code: StatusCode::CREATED,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        // Serialize first so a failure still yields a well-formed error envelope
        let data_value = match serde_json::to_value(&self.data) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                return ApiError::internal(e.to_string()).into_response();
            }
        };

        let envelope = json!({
            "success": true,
            "data": data_value
        });

        (self.status_code, Json(envelope)).into_response()
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_of(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn wraps_data_in_success_envelope() {
        let response = ApiResponse::success(json!({"id": 1})).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_of(response).await;
        assert_eq!(body, json!({"success": true, "data": {"id": 1}}));
    }

    #[tokio::test]
    async fn created_uses_201() {
        let response = ApiResponse::created(vec!["a"]).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_of(response).await["data"], json!(["a"]));
    }
}
