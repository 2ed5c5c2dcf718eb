// database/seed.rs - demo data for local development
//
// Wipes every table and loads a small fixed catalogue plus two login accounts.
// Runs in a single transaction so a failure leaves the previous data intact.

use std::collections::HashMap;

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

use crate::auth::hash_password;
use crate::database::models::PetStatus;

const CATEGORIES: &[&str] = &["Dogs", "Cats", "Rabbits"];

const TAGS: &[&str] = &["Friendly", "Trained", "Vaccinated", "Purebred", "Hypoallergenic"];

struct SeedPet {
    name: &'static str,
    status: PetStatus,
    photo: &'static str,
    category: &'static str,
    tags: &'static [&'static str],
}

const PETS: &[SeedPet] = &[
    SeedPet {
        name: "Max",
        status: PetStatus::Available,
        photo: "https://images.unsplash.com/photo-1587300003388-59208cc962cb",
        category: "Dogs",
        tags: &["Friendly", "Trained", "Vaccinated"],
    },
    SeedPet {
        name: "Bella",
        status: PetStatus::Available,
        photo: "https://images.unsplash.com/photo-1583511655857-d19b40a7a54e",
        category: "Dogs",
        tags: &["Friendly", "Purebred"],
    },
    SeedPet {
        name: "Whiskers",
        status: PetStatus::Available,
        photo: "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba",
        category: "Cats",
        tags: &["Friendly", "Vaccinated"],
    },
    SeedPet {
        name: "Shadow",
        status: PetStatus::Pending,
        photo: "https://images.unsplash.com/photo-1573865526739-10c1d3a1bc64",
        category: "Cats",
        tags: &["Hypoallergenic", "Vaccinated"],
    },
    SeedPet {
        name: "Fluffy",
        status: PetStatus::Available,
        photo: "https://images.unsplash.com/photo-1585110396000-c9ffd4e4b308",
        category: "Rabbits",
        tags: &["Friendly", "Vaccinated"],
    },
    SeedPet {
        name: "Thumper",
        status: PetStatus::Available,
        photo: "https://images.unsplash.com/photo-1535241749838-299277b6305f",
        category: "Rabbits",
        tags: &["Friendly", "Trained"],
    },
    SeedPet {
        name: "Luna",
        status: PetStatus::Sold,
        photo: "https://images.unsplash.com/photo-1552053831-71594a27632d",
        category: "Dogs",
        tags: &["Trained", "Purebred", "Vaccinated"],
    },
    SeedPet {
        name: "Oliver",
        status: PetStatus::Available,
        photo: "https://images.unsplash.com/photo-1574158622682-e40e69881006",
        category: "Cats",
        tags: &["Friendly"],
    },
];

const USERS: &[&str] = &["admin@petstore.com", "user@petstore.com"];

const DEFAULT_PASSWORD: &str = "password123";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub tags: usize,
    pub pets: usize,
    pub users: usize,
}

/// Replace all data with the demo catalogue
pub async fn run(pool: &PgPool, bcrypt_cost: u32) -> Result<SeedSummary> {
    info!("Starting seed...");

    // Hash once up front; bcrypt is slow and every seeded user shares it
    let password_hash = hash_password(DEFAULT_PASSWORD, bcrypt_cost)
        .await
        .context("failed to hash seed password")?;

    let mut tx = pool.begin().await?;

    sqlx::query("TRUNCATE pet_tags, pets, categories, tags, users RESTART IDENTITY CASCADE")
        .execute(&mut *tx)
        .await
        .context("failed to clear existing data")?;

    let mut category_ids = HashMap::new();
    for name in CATEGORIES {
        let (id,): (i32,) = sqlx::query_as("INSERT INTO categories (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(&mut *tx)
            .await?;
        category_ids.insert(*name, id);
    }
    info!("Created categories");

    let mut tag_ids = HashMap::new();
    for name in TAGS {
        let (id,): (i32,) = sqlx::query_as("INSERT INTO tags (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(&mut *tx)
            .await?;
        tag_ids.insert(*name, id);
    }
    info!("Created tags");

    for pet in PETS {
        let category_id = category_ids
            .get(pet.category)
            .copied()
            .with_context(|| format!("unknown seed category '{}'", pet.category))?;

        let (pet_id,): (i32,) = sqlx::query_as(
            "INSERT INTO pets (name, status, photo_urls, category_id) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(pet.name)
        .bind(pet.status.as_str())
        .bind(vec![pet.photo.to_string()])
        .bind(category_id)
        .fetch_one(&mut *tx)
        .await?;

        for tag in pet.tags {
            let tag_id = tag_ids
                .get(tag)
                .copied()
                .with_context(|| format!("unknown seed tag '{}'", tag))?;
            sqlx::query("INSERT INTO pet_tags (pet_id, tag_id) VALUES ($1, $2)")
                .bind(pet_id)
                .bind(tag_id)
                .execute(&mut *tx)
                .await?;
        }
    }
    info!("Created pets");

    for email in USERS {
        sqlx::query("INSERT INTO users (email, password) VALUES ($1, $2)")
            .bind(email)
            .bind(&password_hash)
            .execute(&mut *tx)
            .await?;
    }
    info!("Created users");

    tx.commit().await?;
    info!("Seed completed successfully!");

    Ok(SeedSummary {
        categories: CATEGORIES.len(),
        tags: TAGS.len(),
        pets: PETS.len(),
        users: USERS.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_pets_reference_known_categories_and_tags() {
        for pet in PETS {
            assert!(CATEGORIES.contains(&pet.category), "{} has unknown category", pet.name);
            for tag in pet.tags {
                assert!(TAGS.contains(tag), "{} has unknown tag {}", pet.name, tag);
            }
        }
    }

    #[test]
    fn seed_pet_tags_are_unique_per_pet() {
        for pet in PETS {
            let mut tags = pet.tags.to_vec();
            tags.sort_unstable();
            tags.dedup();
            assert_eq!(tags.len(), pet.tags.len(), "{} repeats a tag", pet.name);
        }
    }
}
