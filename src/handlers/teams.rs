use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    convention::ExternalJson,
    errors::Result,
    models::team::{CreateTeam, Team},
    services::ids::EntityKind,
    state::AppState,
};

// GET /api/teams
pub async fn get_teams(State(state): State<AppState>) -> Result<ExternalJson<Vec<Team>>> {
    let mut teams = state.store.list_teams().await?;
    teams.sort_by(|a, b| a.name.cmp(&b.name));

    tracing::debug!("Fetched {} teams", teams.len());
    Ok(ExternalJson(teams))
}

// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    ExternalJson(payload): ExternalJson<CreateTeam>,
) -> Result<(StatusCode, ExternalJson<Team>)> {
    payload.validate()?;

    let id = state.ids.mint(EntityKind::Team, state.now());
    let team = state.store.insert_team(payload.into_team(id)).await?;

    tracing::info!("✅ Created team {} ({})", team.name, team.id);
    Ok((StatusCode::CREATED, ExternalJson(team)))
}

// DELETE /api/teams/:id
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let deleted = state.store.delete_team(&id).await?;

    tracing::info!("🗑️ Deleted team {} ({} row(s))", id, deleted);
    Ok(StatusCode::NO_CONTENT)
}
