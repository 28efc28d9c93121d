use std::str::FromStr;
use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Errors from DatabaseManager
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(String),

    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Opens the SQLite pool shared by every request handler.
///
/// The pool is handed to the router as state; handlers borrow a connection
/// (or open a transaction) for the lifetime of one request.
pub struct DatabaseManager;

impl DatabaseManager {
    /// Connect using the configured URL and apply pending migrations.
    pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, DatabaseError> {
        let mut options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|_| DatabaseError::InvalidDatabaseUrl(config.url.clone()))?
            .create_if_missing(true)
            .foreign_keys(true);

        if !config.enable_query_logging {
            options = options.disable_statement_logging();
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect_with(options)
            .await?;

        info!("Opened database pool for: {}", config.url);

        Self::migrate(&pool).await?;
        Ok(pool)
    }

    /// Private in-memory database, used by tests and throwaway runs.
    ///
    /// A single connection that never expires; every new connection to
    /// `sqlite::memory:` would otherwise see an empty database.
    pub async fn connect_in_memory() -> Result<SqlitePool, DatabaseError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::migrate(&pool).await?;
        Ok(pool)
    }

    pub async fn migrate(pool: &SqlitePool) -> Result<(), DatabaseError> {
        MIGRATOR.run(pool).await?;
        info!("Database migrations applied");
        Ok(())
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(pool: &SqlitePool) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }
}
