//! Embedded schema migrations.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use workout_core::error::{AppError, ErrorKind};

/// Migrations under `migrations/`, compiled into the binary.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Applies every pending migration.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to apply schema migrations: {e}"),
            e,
        )
    })?;

    let latest = MIGRATOR.iter().map(|m| m.version).max().unwrap_or_default();
    info!(migrations = MIGRATOR.iter().count(), latest, "Schema is up to date");
    Ok(())
}
