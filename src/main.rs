use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use kora_live_api::{
    build_router,
    config::AppConfig,
    database::{connection, PgStore},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().context("failed to load configuration")?;
    let pool = connection::connect(&config)
        .await
        .context("failed to initialize database")?;

    let app_state = AppState::new(Arc::new(PgStore::new(pool)), config.admin.clone());
    let app = build_router(app_state);

    let addr = config.socket_addr()?;
    tracing::info!("🚀 Server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
