/**
 * Server Configuration
 *
 * Environment-driven configuration and the pool lifecycle. Startup fails
 * fast when required configuration is missing: the pool is a process-wide
 * resource acquired once at boot and injected into handlers, never an
 * optional service the server limps along without.
 */

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

/// Port used when `SERVER_PORT` is not set
pub const DEFAULT_PORT: u16 = 5000;

/// Configuration errors surface before anything is bound or connected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("SERVER_PORT is not a valid port: {0}")]
    BadPort(String),
}

/// Server configuration
///
/// * `DATABASE_URL` - required, Postgres connection string
/// * `JWT_SECRET` - required, session token signing secret
/// * `SERVER_PORT` - optional, defaults to 5000
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
}

impl Config {
    /// Load from the environment (a `.env` file has already been applied)
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require("DATABASE_URL")?;
        let jwt_secret = require("JWT_SECRET")?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::BadPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            port,
        })
    }
}

/// A blank variable is treated the same as an unset one
fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

/// Open the connection pool and bring the schema up to date
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    tracing::info!("connecting to the database");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;

    tracing::info!("running database migrations");
    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}
