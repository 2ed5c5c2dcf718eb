use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(skip_serializing)]
    pub url: String,
    pub max_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    #[serde(skip_serializing)]
    pub jwt_secret: String,
    pub jwt_expiry_hours: u64,
    pub bcrypt_cost: u32,
    pub enable_cors: bool,
}

/// Longest token lifetime accepted from configuration (one year)
pub const MAX_JWT_EXPIRY_HOURS: u64 = 24 * 365;

impl SecurityConfig {
    /// Token lifetime in seconds, as reported to clients on login
    pub fn jwt_expiry_secs(&self) -> i64 {
        (self.jwt_expiry_hours.min(MAX_JWT_EXPIRY_HOURS) * 3600) as i64
    }
}

/// Errors raised while assembling configuration at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. `from_env` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("APP_ENV").as_deref() {
            Some("production") | Some("prod") => Environment::Production,
            Some("staging") | Some("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        let config = match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_overrides(&lookup)?;

        config.validate()?;
        Ok(config)
    }

    fn with_overrides<F>(mut self, lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server overrides
        if let Some(v) = lookup("PETSTORE_API_PORT").or_else(|| lookup("PORT")) {
            self.server.port = parse("PORT", &v)?;
        }

        // Database overrides
        if let Some(v) = lookup("DATABASE_URL") {
            self.database.url = v;
        }
        if let Some(v) = lookup("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = parse("DATABASE_MAX_CONNECTIONS", &v)?;
        }
        if let Some(v) = lookup("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = parse("DATABASE_CONNECTION_TIMEOUT", &v)?;
        }

        // Security overrides
        if let Some(v) = lookup("JWT_SECRET") {
            self.security.jwt_secret = v;
        }
        if let Some(v) = lookup("JWT_EXPIRY_HOURS") {
            self.security.jwt_expiry_hours = parse("JWT_EXPIRY_HOURS", &v)?;
        }
        if let Some(v) = lookup("BCRYPT_COST") {
            self.security.bcrypt_cost = parse("BCRYPT_COST", &v)?;
        }
        if let Some(v) = lookup("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = parse("SECURITY_ENABLE_CORS", &v)?;
        }

        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }
        if self.security.jwt_secret.is_empty() {
            return Err(ConfigError::Missing("JWT_SECRET"));
        }
        // bcrypt rejects costs outside this range at hash time
        if !(4..=31).contains(&self.security.bcrypt_cost) {
            return Err(ConfigError::Invalid {
                key: "BCRYPT_COST",
                value: self.security.bcrypt_cost.to_string(),
            });
        }
        if !(1..=MAX_JWT_EXPIRY_HOURS).contains(&self.security.jwt_expiry_hours) {
            return Err(ConfigError::Invalid {
                key: "JWT_EXPIRY_HOURS",
                value: self.security.jwt_expiry_hours.to_string(),
            });
        }
        Ok(())
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig { port: 3000 },
            database: DatabaseConfig {
                url: String::new(),
                max_connections: 10,
                connection_timeout: 30,
            },
            security: SecurityConfig {
                jwt_secret: String::new(),
                jwt_expiry_hours: 24,
                bcrypt_cost: 10,
                enable_cors: true,
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig { port: 3000 },
            database: DatabaseConfig {
                url: String::new(),
                max_connections: 20,
                connection_timeout: 10,
            },
            security: SecurityConfig {
                jwt_secret: String::new(),
                jwt_expiry_hours: 24,
                bcrypt_cost: 10,
                enable_cors: true,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig { port: 3000 },
            database: DatabaseConfig {
                url: String::new(),
                max_connections: 50,
                connection_timeout: 5,
            },
            security: SecurityConfig {
                jwt_secret: String::new(),
                jwt_expiry_hours: 4,
                bcrypt_cost: 12,
                enable_cors: false,
            },
        }
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}
