use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from the persistence layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Corrupt row: {0}")]
    CorruptRow(String),

    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Sqlx(sqlx::Error),
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                let constraint = db_err.constraint().unwrap_or_default().to_string();
                return DatabaseError::UniqueViolation(constraint);
            }
        }
        DatabaseError::Sqlx(err)
    }
}

/// Owns the lifecycle of the process-wide connection pool: created once at
/// startup, shared through `AppState`, closed on shutdown.
pub struct DatabaseManager;

impl DatabaseManager {
    /// Connect the pool and apply embedded migrations
    pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
        let target = Self::redacted_url(&config.url)?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(&config.url)
            .await?;

        info!("Connected database pool: {}", target);

        Self::migrate(&pool).await?;
        Ok(pool)
    }

    /// Build a pool that connects on first use. Nothing touches the network
    /// until a query runs.
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
        Self::redacted_url(&config.url)?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect_lazy(&config.url)?;
        Ok(pool)
    }

    pub async fn migrate(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::migrate!("./migrations").run(pool).await?;
        info!("Database migrations applied");
        Ok(())
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }

    /// Close the pool, waiting for checked-out connections to return
    pub async fn close(pool: &PgPool) {
        pool.close().await;
        info!("Closed database pool");
    }

    /// Connection target with the password masked, for logs
    pub fn redacted_url(database_url: &str) -> Result<String, DatabaseError> {
        let mut url = url::Url::parse(database_url).map_err(|_| DatabaseError::InvalidDatabaseUrl)?;
        if url.password().is_some() {
            url.set_password(Some("***"))
                .map_err(|_| DatabaseError::InvalidDatabaseUrl)?;
        }
        Ok(url.into())
    }
}
