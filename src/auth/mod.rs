use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{SecurityConfig, MAX_JWT_EXPIRY_HOURS};

/// Claims carried by session tokens. Only identity is embedded; there is no
/// session table behind them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: i32,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    /// Lifetimes past `MAX_JWT_EXPIRY_HOURS` are clamped to it
    pub fn new(id: i32, email: impl Into<String>, expiry_hours: u64) -> Self {
        let now = Utc::now();
        let hours = expiry_hours.min(MAX_JWT_EXPIRY_HOURS) as i64;
        let exp = (now + Duration::hours(hours)).timestamp();

        Self {
            id,
            email: email.into(),
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("JWT secret not configured")]
    InvalidSecret,

    #[error("Invalid JWT token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("Password hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub fn generate_jwt(claims: &Claims, security: &SecurityConfig) -> Result<String, AuthError> {
    let secret = &security.jwt_secret;

    if secret.is_empty() {
        return Err(AuthError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());

    encode(&Header::default(), claims, &encoding_key)
        .map_err(|e| AuthError::TokenGeneration(e.to_string()))
}

/// Verify signature and expiry, returning the embedded claims
pub fn validate_jwt(token: &str, security: &SecurityConfig) -> Result<Claims, AuthError> {
    let secret = &security.jwt_secret;

    if secret.is_empty() {
        return Err(AuthError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::default();
    validation.leeway = 0;

    let token_data = decode::<Claims>(token, &decoding_key, &validation)?;
    Ok(token_data.claims)
}

/// Hash a plaintext password on the blocking pool
pub async fn hash_password(password: &str, cost: u32) -> Result<String, AuthError> {
    let password = password.to_owned();
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hashed)
}

/// Compare a plaintext password against a stored bcrypt hash on the blocking pool
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(matches)
}
