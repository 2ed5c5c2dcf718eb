use std::collections::HashMap;

use sqlx::{PgConnection, PgPool};
use thiserror::Error;

use crate::database::manager::DatabaseError;
use crate::database::models::{Pet, PetRow, PetStatus, Tag};

/// Outcomes of pet operations that the caller maps to client errors
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Pet {0} not found")]
    PetNotFound(i32),

    #[error("Category {0} not found")]
    CategoryNotFound(i32),

    #[error("Tag {0} not found")]
    TagNotFound(i32),

    #[error("Invalid status '{0}'")]
    InvalidStatus(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        RepositoryError::Database(err.into())
    }
}

/// Validated input for pet creation
#[derive(Debug, Clone)]
pub struct NewPet {
    pub name: String,
    pub status: PetStatus,
    pub category_id: i32,
    pub photo_urls: Vec<String>,
}

/// Partial update. `None` leaves the column untouched; `Some` overwrites it,
/// including with an empty string or empty list. `status` is raw client text,
/// parsed only after the pet is found.
#[derive(Debug, Clone, Default)]
pub struct PetChanges {
    pub name: Option<String>,
    pub status: Option<String>,
    pub category_id: Option<i32>,
    pub photo_urls: Option<Vec<String>>,
}

const PET_SELECT: &str = r#"
    SELECT p.id, p.name, p.status, p.photo_urls, p.category_id, p.created_at,
           c.name AS category_name
    FROM pets p
    JOIN categories c ON c.id = p.category_id
"#;

pub struct PetRepository {
    pool: PgPool,
}

impl PetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All pets, newest first, each with category and tags
    pub async fn list(&self) -> Result<Vec<Pet>, RepositoryError> {
        let mut conn = self.pool.acquire().await?;

        let sql = format!("{} ORDER BY p.created_at DESC, p.id DESC", PET_SELECT);
        let rows = sqlx::query_as::<_, PetRow>(&sql)
            .fetch_all(&mut *conn)
            .await?;

        Ok(expand(&mut conn, rows).await?)
    }

    pub async fn find(&self, id: i32) -> Result<Option<Pet>, RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        Ok(fetch_pet(&mut conn, id).await?)
    }

    /// Insert a pet after confirming its category exists. The category row is
    /// share-locked so it cannot disappear between the check and the insert.
    pub async fn create(&self, new_pet: NewPet) -> Result<Pet, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        lock_category(&mut tx, new_pet.category_id).await?;

        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO pets (name, status, photo_urls, category_id) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&new_pet.name)
        .bind(new_pet.status.as_str())
        .bind(&new_pet.photo_urls)
        .bind(new_pet.category_id)
        .fetch_one(&mut *tx)
        .await?;

        let pet = fetch_pet(&mut tx, id)
            .await?
            .ok_or(RepositoryError::PetNotFound(id))?;

        tx.commit().await?;
        tracing::debug!("Created pet {} ({})", pet.id, pet.name);
        Ok(pet)
    }

    /// Apply a partial update. The pet must exist, then any status and any new
    /// category are checked, all before the write and inside one transaction.
    pub async fn update(&self, id: i32, changes: PetChanges) -> Result<Pet, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<(i32,)> = sqlx::query_as("SELECT id FROM pets WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_none() {
            return Err(RepositoryError::PetNotFound(id));
        }

        let status = changes.status.as_deref().map(parse_status).transpose()?;

        if let Some(category_id) = changes.category_id {
            lock_category(&mut tx, category_id).await?;
        }

        sqlx::query(
            r#"
            UPDATE pets SET
                name        = COALESCE($2, name),
                status      = COALESCE($3, status),
                category_id = COALESCE($4, category_id),
                photo_urls  = COALESCE($5, photo_urls)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(changes.name)
        .bind(status.map(|s| s.as_str()))
        .bind(changes.category_id)
        .bind(changes.photo_urls)
        .execute(&mut *tx)
        .await?;

        let pet = fetch_pet(&mut tx, id)
            .await?
            .ok_or(RepositoryError::PetNotFound(id))?;

        tx.commit().await?;
        Ok(pet)
    }

    /// Delete a pet; its tag associations go with it via ON DELETE CASCADE
    pub async fn delete(&self, id: i32) -> Result<i32, RepositoryError> {
        let deleted: Option<(i32,)> = sqlx::query_as("DELETE FROM pets WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        deleted
            .map(|(id,)| id)
            .ok_or(RepositoryError::PetNotFound(id))
    }

    /// Associate an existing tag with a pet. Re-attaching is a no-op.
    pub async fn attach_tag(&self, pet_id: i32, tag_id: i32) -> Result<Pet, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        lock_pet(&mut tx, pet_id).await?;

        let tag: Option<(i32,)> = sqlx::query_as("SELECT id FROM tags WHERE id = $1 FOR SHARE")
            .bind(tag_id)
            .fetch_optional(&mut *tx)
            .await?;
        if tag.is_none() {
            return Err(RepositoryError::TagNotFound(tag_id));
        }

        sqlx::query("INSERT INTO pet_tags (pet_id, tag_id) VALUES ($1, $2) ON CONFLICT DO NOTHING")
            .bind(pet_id)
            .bind(tag_id)
            .execute(&mut *tx)
            .await?;

        let pet = fetch_pet(&mut tx, pet_id)
            .await?
            .ok_or(RepositoryError::PetNotFound(pet_id))?;

        tx.commit().await?;
        Ok(pet)
    }

    /// Remove a tag association if present. The tag itself is kept.
    pub async fn detach_tag(&self, pet_id: i32, tag_id: i32) -> Result<Pet, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        lock_pet(&mut tx, pet_id).await?;

        sqlx::query("DELETE FROM pet_tags WHERE pet_id = $1 AND tag_id = $2")
            .bind(pet_id)
            .bind(tag_id)
            .execute(&mut *tx)
            .await?;

        let pet = fetch_pet(&mut tx, pet_id)
            .await?
            .ok_or(RepositoryError::PetNotFound(pet_id))?;

        tx.commit().await?;
        Ok(pet)
    }
}

fn parse_status(raw: &str) -> Result<PetStatus, RepositoryError> {
    raw.parse()
        .map_err(|_| RepositoryError::InvalidStatus(raw.to_string()))
}

async fn lock_pet(conn: &mut PgConnection, pet_id: i32) -> Result<(), RepositoryError> {
    let pet: Option<(i32,)> = sqlx::query_as("SELECT id FROM pets WHERE id = $1 FOR SHARE")
        .bind(pet_id)
        .fetch_optional(&mut *conn)
        .await?;

    pet.map(|_| ()).ok_or(RepositoryError::PetNotFound(pet_id))
}

async fn lock_category(conn: &mut PgConnection, category_id: i32) -> Result<(), RepositoryError> {
    let category: Option<(i32,)> = sqlx::query_as("SELECT id FROM categories WHERE id = $1 FOR SHARE")
        .bind(category_id)
        .fetch_optional(&mut *conn)
        .await?;

    category
        .map(|_| ())
        .ok_or(RepositoryError::CategoryNotFound(category_id))
}

async fn fetch_pet(conn: &mut PgConnection, id: i32) -> Result<Option<Pet>, DatabaseError> {
    let sql = format!("{} WHERE p.id = $1", PET_SELECT);
    let row = sqlx::query_as::<_, PetRow>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    match row {
        Some(row) => Ok(expand(conn, vec![row]).await?.pop()),
        None => Ok(None),
    }
}

/// Attach each row's category-expanded form to its tags, preserving row order
async fn expand(conn: &mut PgConnection, rows: Vec<PetRow>) -> Result<Vec<Pet>, DatabaseError> {
    let ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
    let mut tags = load_tags(conn, &ids).await?;

    rows.into_iter()
        .map(|row| {
            let pet_tags = tags.remove(&row.id).unwrap_or_default();
            let pet_id = row.id;
            row.into_pet(pet_tags).map_err(|e| {
                DatabaseError::CorruptRow(format!("pet {} has status '{}'", pet_id, e.0))
            })
        })
        .collect()
}

async fn load_tags(
    conn: &mut PgConnection,
    pet_ids: &[i32],
) -> Result<HashMap<i32, Vec<Tag>>, DatabaseError> {
    let mut by_pet: HashMap<i32, Vec<Tag>> = HashMap::new();
    if pet_ids.is_empty() {
        return Ok(by_pet);
    }

    let rows: Vec<(i32, i32, String)> = sqlx::query_as(
        r#"
        SELECT pt.pet_id, t.id, t.name
        FROM pet_tags pt
        JOIN tags t ON t.id = pt.tag_id
        WHERE pt.pet_id = ANY($1)
        ORDER BY pt.pet_id, t.id
        "#,
    )
    .bind(pet_ids)
    .fetch_all(&mut *conn)
    .await?;

    for (pet_id, id, name) in rows {
        by_pet.entry(pet_id).or_default().push(Tag { id, name });
    }
    Ok(by_pet)
}
