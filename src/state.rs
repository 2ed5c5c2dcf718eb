use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;
use crate::database::PetRepository;

/// Shared application state handed to every handler. Cloning is cheap: the
/// pool is reference counted and the config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: PgPool, config: AppConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }

    pub fn pets(&self) -> PetRepository {
        PetRepository::new(self.pool.clone())
    }
}
