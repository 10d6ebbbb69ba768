//! Process-startup sequence for the store.
//!
//! Opens the pool at the configured location, ensures the schema exists and
//! seeds the sample dataset into an empty store. Tests call [`bootstrap`]
//! with options pointing at a temporary file.

use sqlx::sqlite::SqliteConnectOptions;

use crate::error::StoreResult;
use crate::seed::{sample_projects, sample_tasks, seed_if_empty};
use crate::{connect_options, create_pool, health_check, init_schema, DbPool};

/// Open, migrate and seed the store described by `options`.
pub async fn bootstrap(options: SqliteConnectOptions) -> StoreResult<DbPool> {
    let filename = options.get_filename().display().to_string();

    let pool = create_pool(options.create_if_missing(true)).await?;
    tracing::info!(database = %filename, "Database connection pool created");

    health_check(&pool).await?;
    init_schema(&pool).await?;
    tracing::info!("Database schema ready");

    let seeded = seed_if_empty(&pool, &sample_projects(), &sample_tasks()).await?;
    tracing::info!(seeded, "Database bootstrap complete");

    Ok(pool)
}

/// [`bootstrap`] from a `sqlite://` connection string.
pub async fn bootstrap_url(database_url: &str) -> StoreResult<DbPool> {
    bootstrap(connect_options(database_url)?).await
}
