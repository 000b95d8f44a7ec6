use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    convention::ExternalJson,
    errors::Result,
    models::league::{CreateLeague, League},
    services::ids::EntityKind,
    state::AppState,
};

// GET /api/leagues
pub async fn get_leagues(State(state): State<AppState>) -> Result<ExternalJson<Vec<League>>> {
    let mut leagues = state.store.list_leagues().await?;
    leagues.sort_by(|a, b| a.name.cmp(&b.name));

    tracing::debug!("Fetched {} leagues", leagues.len());
    Ok(ExternalJson(leagues))
}

// POST /api/leagues
pub async fn create_league(
    State(state): State<AppState>,
    ExternalJson(payload): ExternalJson<CreateLeague>,
) -> Result<(StatusCode, ExternalJson<League>)> {
    payload.validate()?;

    let id = state.ids.mint(EntityKind::League, state.now());
    let league = state.store.insert_league(payload.into_league(id)).await?;

    tracing::info!("✅ Created league {} ({})", league.name, league.id);
    Ok((StatusCode::CREATED, ExternalJson(league)))
}

// DELETE /api/leagues/:id
pub async fn delete_league(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let deleted = state.store.delete_league(&id).await?;

    tracing::info!("🗑️ Deleted league {} ({} row(s))", id, deleted);
    Ok(StatusCode::NO_CONTENT)
}
