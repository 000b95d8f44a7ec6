use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::AppConfig;
use crate::errors::Result;

/// Opens the connection pool and brings the schema up to date.
pub async fn connect(config: &AppConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.database_url)
        .await?;

    tracing::info!("✅ Connected to PostgreSQL database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("📂 Database migrations applied");

    Ok(pool)
}
