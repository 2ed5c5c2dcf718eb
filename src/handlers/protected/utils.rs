use crate::error::ApiError;

/// Parse a path segment as a row id
pub fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.trim().parse::<i32>().map_err(|_| ApiError::invalid_id(raw))
}

/// Trimmed, non-empty name or `MISSING_FIELDS`
pub fn require_name(name: Option<String>) -> Result<String, ApiError> {
    match name.map(|n| n.trim().to_string()) {
        Some(n) if !n.is_empty() => Ok(n),
        _ => Err(ApiError::missing_fields("Name is required")),
    }
}
