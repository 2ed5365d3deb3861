use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from the record store layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error("Invalid collection name: {0}")]
    InvalidCollectionName(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Document serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl DatabaseError {
    /// True when the failure means the store could not be reached at all,
    /// as opposed to a failed statement on a live connection.
    pub fn is_connectivity(&self) -> bool {
        match self {
            DatabaseError::ConnectionError(_) => true,
            DatabaseError::Sqlx(err) => matches!(
                err,
                sqlx::Error::Io(_)
                    | sqlx::Error::Tls(_)
                    | sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
            ),
            _ => false,
        }
    }
}

/// Connection pool construction and schema bootstrap for the PostgreSQL backend
pub struct DatabaseManager;

impl DatabaseManager {
    /// Open a pool against `database_url` using the configured limits.
    pub async fn connect(database_url: &str, settings: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
        let target = Self::describe_url(database_url)?;

        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(Duration::from_secs(settings.connection_timeout))
            .connect(database_url)
            .await
            .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

        info!("Created database pool for: {}", target);
        Ok(pool)
    }

    /// Create the backing table for a document collection if it is missing
    pub async fn ensure_collection(pool: &PgPool, collection: &str) -> Result<(), DatabaseError> {
        let table = Self::quote_identifier(collection)?;
        let ddl = format!(
            "CREATE TABLE IF NOT EXISTS {} (\
                seq BIGSERIAL, \
                id TEXT PRIMARY KEY, \
                doc JSONB NOT NULL, \
                inserted_at TIMESTAMPTZ NOT NULL DEFAULT now()\
            )",
            table
        );
        sqlx::query(&ddl).execute(pool).await?;

        info!("Ensured collection table: {}", collection);
        Ok(())
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }

    /// Host and database name of a connection URL, without credentials.
    pub fn describe_url(database_url: &str) -> Result<String, DatabaseError> {
        let url = url::Url::parse(database_url).map_err(|_| DatabaseError::InvalidDatabaseUrl)?;
        let host = url.host_str().ok_or(DatabaseError::InvalidDatabaseUrl)?;
        let port = url.port().map(|p| format!(":{}", p)).unwrap_or_default();
        Ok(format!("{}{}{}", host, port, url.path()))
    }

    /// Validate and quote a collection name for use as a SQL identifier.
    /// Accepts lowercase ASCII letters and underscores only.
    pub fn quote_identifier(name: &str) -> Result<String, DatabaseError> {
        let valid = !name.is_empty() && name.chars().all(|c| c.is_ascii_lowercase() || c == '_');
        if !valid {
            return Err(DatabaseError::InvalidCollectionName(name.to_string()));
        }
        Ok(format!("\"{}\"", name))
    }
}
