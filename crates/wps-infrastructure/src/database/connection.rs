//! Database connection pool and backend selection

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;
use tracing::info;
use wps_core::repositories::Repositories;
use wps_shared::config::{BackendKind, DatabaseSettings};

use super::memory::MemoryStore;
use super::postgres;

#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub async fn create_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect(&settings.url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), InfrastructureError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Repositories for the configured backend.
pub async fn connect(settings: &DatabaseSettings) -> Result<Repositories, InfrastructureError> {
    match settings.backend {
        BackendKind::Postgres => {
            let pool = create_pool(settings).await?;
            info!(
                "PostgreSQL pool ready (max {} connections)",
                settings.max_connections
            );
            if settings.run_migrations {
                run_migrations(&pool).await?;
                info!("Database migrations applied");
            }
            Ok(postgres::repositories(pool))
        }
        BackendKind::Memory => {
            info!("Using in-memory backend with seeded industry weightings");
            Ok(MemoryStore::with_default_weightings().repositories())
        }
    }
}
