use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Category, Tag, User};

/// Look up a credential row by email (exact match)
pub async fn find_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, DatabaseError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, email, password, created_at
         FROM users
         WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Insert a user with an already-hashed password. A duplicate email surfaces
/// as `DatabaseError::UniqueViolation`.
pub async fn create_user(pool: &PgPool, email: &str, password_hash: &str) -> Result<User, DatabaseError> {
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (email, password)
         VALUES ($1, $2)
         RETURNING id, email, password, created_at",
    )
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub async fn list_categories(pool: &PgPool) -> Result<Vec<Category>, DatabaseError> {
    let categories = sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(categories)
}

pub async fn create_category(pool: &PgPool, name: &str) -> Result<Category, DatabaseError> {
    let category = sqlx::query_as::<_, Category>("INSERT INTO categories (name) VALUES ($1) RETURNING id, name")
        .bind(name)
        .fetch_one(pool)
        .await?;

    Ok(category)
}

pub async fn list_tags(pool: &PgPool) -> Result<Vec<Tag>, DatabaseError> {
    let tags = sqlx::query_as::<_, Tag>("SELECT id, name FROM tags ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(tags)
}

pub async fn create_tag(pool: &PgPool, name: &str) -> Result<Tag, DatabaseError> {
    let tag = sqlx::query_as::<_, Tag>("INSERT INTO tags (name) VALUES ($1) RETURNING id, name")
        .bind(name)
        .fetch_one(pool)
        .await?;

    Ok(tag)
}
