use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    convention::ExternalJson,
    errors::Result,
    models::news::{CreateNews, News},
    services::ids::EntityKind,
    state::AppState,
};

// GET /api/news - newest first
pub async fn get_news(State(state): State<AppState>) -> Result<ExternalJson<Vec<News>>> {
    let mut news = state.store.list_news().await?;
    news.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(ExternalJson(news))
}

// POST /api/news
pub async fn create_news(
    State(state): State<AppState>,
    ExternalJson(payload): ExternalJson<CreateNews>,
) -> Result<(StatusCode, ExternalJson<News>)> {
    payload.validate()?;

    let now = state.now();
    let id = state.ids.mint(EntityKind::News, now);
    let news = state.store.insert_news(payload.into_news(id, now)).await?;

    tracing::info!("📰 Published news item {}", news.id);
    Ok((StatusCode::CREATED, ExternalJson(news)))
}

// DELETE /api/news/:id
pub async fn delete_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let deleted = state.store.delete_news(&id).await?;

    tracing::info!("🗑️ Deleted news item {} ({} row(s))", id, deleted);
    Ok(StatusCode::NO_CONTENT)
}
