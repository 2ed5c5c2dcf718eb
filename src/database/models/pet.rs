use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

use super::{Category, Tag};

/// Adoption status. Stored as lowercase text guarded by a CHECK constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Available,
    Pending,
    Sold,
}

impl PetStatus {
    pub const ALL: [PetStatus; 3] = [PetStatus::Available, PetStatus::Pending, PetStatus::Sold];

    pub fn as_str(&self) -> &'static str {
        match self {
            PetStatus::Available => "available",
            PetStatus::Pending => "pending",
            PetStatus::Sold => "sold",
        }
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidStatus(pub String);

impl FromStr for PetStatus {
    type Err = InvalidStatus;

    /// Exact, case-sensitive match
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PetStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| InvalidStatus(s.to_string()))
    }
}

/// Flat row from `pets JOIN categories`
#[derive(Debug, Clone, FromRow)]
pub struct PetRow {
    pub id: i32,
    pub name: String,
    pub status: String,
    pub photo_urls: Vec<String>,
    pub category_id: i32,
    pub created_at: DateTime<Utc>,
    pub category_name: String,
}

/// A pet expanded with its category and flattened tag list. The join rows
/// themselves are never exposed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: i32,
    pub name: String,
    pub status: PetStatus,
    pub photo_urls: Vec<String>,
    pub category_id: i32,
    pub created_at: DateTime<Utc>,
    pub category: Category,
    pub tags: Vec<Tag>,
}

impl PetRow {
    pub fn into_pet(self, tags: Vec<Tag>) -> Result<Pet, InvalidStatus> {
        let status = self.status.parse()?;
        Ok(Pet {
            id: self.id,
            name: self.name,
            status,
            photo_urls: self.photo_urls,
            category_id: self.category_id,
            created_at: self.created_at,
            category: Category {
                id: self.category_id,
                name: self.category_name,
            },
            tags,
        })
    }
}
