use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MIGRATIONS_PATH: &str = "./migrations";

/// Initialize the shared database pool and bring the schema up to date
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MIGRATIONS_PATH: Directory holding SQL migrations (default: "./migrations")
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the connection fails or a migration fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = create_postgres_pool(&DatabaseConfig::new(db_url)).await?;

    let migrations_path = env::var("DATABASE_MIGRATIONS_PATH")
        .unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());
    run_migrations(&pool, &migrations_path)
        .await
        .with_context(|| format!("applying migrations from {migrations_path}"))?;

    Ok(pool)
}
