mod common;

use anyhow::Result;
use chrono::Utc;
use petstore_api::auth::{generate_jwt, Claims};
use serde_json::json;

#[tokio::test]
async fn root_describes_service() -> Result<()> {
    let server = common::offline_server().await?;

    let (status, body) = server.get("/", None).await?;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Pet Store API");
    Ok(())
}

#[tokio::test]
async fn health_reports_unavailable_database() -> Result<()> {
    let server = common::offline_server().await?;

    let (status, body) = server.get("/health", None).await?;
    assert_eq!(status, 503);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "DATABASE_UNAVAILABLE");
    Ok(())
}

#[tokio::test]
async fn protected_routes_require_token() -> Result<()> {
    let server = common::offline_server().await?;

    for path in ["/pets", "/pets/1", "/categories", "/tags", "/auth/me"] {
        let (status, body) = server.get(path, None).await?;
        assert_eq!(status, 401, "path {}", path);
        assert_eq!(body["error"]["code"], "NO_TOKEN", "path {}", path);
    }
    Ok(())
}

#[tokio::test]
async fn tampered_token_is_forbidden() -> Result<()> {
    let server = common::offline_server().await?;
    let token = server.token_for(1, "admin@petstore.com");

    let mut parts = token.split('.');
    let header = parts.next().unwrap_or_default();
    let signature = parts.nth(1).unwrap_or_default();
    let forged = format!("{}.eyJpZCI6OTksImVtYWlsIjoieEB5LnoiLCJleHAiOjk5OTk5OTk5OTl9.{}", header, signature);

    let (status, body) = server.get("/pets", Some(&forged)).await?;
    assert_eq!(status, 403);
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");

    let (status, _) = server.get("/pets", Some("not-a-jwt")).await?;
    assert_eq!(status, 403);
    Ok(())
}

#[tokio::test]
async fn expired_token_is_forbidden() -> Result<()> {
    let server = common::offline_server().await?;
    let now = Utc::now().timestamp();
    let claims = Claims {
        id: 1,
        email: "admin@petstore.com".to_string(),
        iat: now - 7200,
        exp: now - 3600,
    };
    let token = generate_jwt(&claims, &server.config.security)?;

    let (status, body) = server.get("/auth/me", Some(&token)).await?;
    assert_eq!(status, 403);
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");
    Ok(())
}

#[tokio::test]
async fn token_signed_with_other_secret_is_forbidden() -> Result<()> {
    let server = common::offline_server().await?;
    let mut security = server.config.security.clone();
    security.jwt_secret = "some-other-secret".to_string();
    let token = generate_jwt(&Claims::new(1, "admin@petstore.com", 1), &security)?;

    let (status, _) = server.get("/auth/me", Some(&token)).await?;
    assert_eq!(status, 403);
    Ok(())
}

#[tokio::test]
async fn whoami_echoes_token_identity() -> Result<()> {
    let server = common::offline_server().await?;
    let token = server.token_for(7, "user@petstore.com");

    let (status, body) = server.get("/auth/me", Some(&token)).await?;
    assert_eq!(status, 200);
    assert_eq!(body["data"], json!({"id": 7, "email": "user@petstore.com"}));
    Ok(())
}

#[tokio::test]
async fn login_requires_both_fields() -> Result<()> {
    let server = common::offline_server().await?;

    for body in [
        json!({}),
        json!({"email": "admin@petstore.com"}),
        json!({"password": "password123"}),
        json!({"email": "", "password": "password123"}),
    ] {
        let (status, response) = server.post("/auth/login", None, body.clone()).await?;
        assert_eq!(status, 400, "body {}", body);
        assert_eq!(response["error"]["code"], "MISSING_FIELDS", "body {}", body);
    }

    let (status, response) = server
        .post("/auth/register", None, json!({"email": "new@petstore.com"}))
        .await?;
    assert_eq!(status, 400);
    assert_eq!(response["error"]["code"], "MISSING_FIELDS");
    Ok(())
}
