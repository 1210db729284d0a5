//! Pool construction and embedded migrations.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Opens a connection pool sized from configuration.
///
/// # Errors
///
/// Returns `DatabaseError` if no URL is configured or the first connection fails.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    let url = config.url().ok_or_else(|| {
        DomainError::new(ErrorCode::DatabaseError, "Database URL is not configured")
    })?;

    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect(url)
        .await
        .map_err(|e| DomainError::database("Failed to connect to database", e))?;

    info!(
        min_connections = config.min_connections,
        max_connections = config.max_connections,
        "Database pool ready"
    );

    Ok(pool)
}

/// Applies the migrations embedded from `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DomainError::database("Failed to run migrations", e))?;

    info!("Database migrations applied");
    Ok(())
}
