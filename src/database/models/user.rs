use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Credential store row. The password column holds a bcrypt hash and is never
/// serialized.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
