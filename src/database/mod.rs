pub mod manager;
pub mod models;
pub mod repository;
pub mod seed;
pub mod service;

pub use manager::{DatabaseError, DatabaseManager};
pub use repository::{NewPet, PetChanges, PetRepository, RepositoryError};
