use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    convention::ExternalJson,
    errors::{AppError, Result},
    models::matches::{newest_first, Match, MatchPayload},
    services::{
        ids::EntityKind,
        timer::{reconcile_elapsed, TimerTransition},
    },
    state::AppState,
};

// GET /api/matches - most recent kick-off first, undated last
pub async fn get_matches(State(state): State<AppState>) -> Result<ExternalJson<Vec<Match>>> {
    let mut matches = state.store.list_matches().await?;
    matches.sort_by(newest_first);

    tracing::debug!("Fetched {} matches", matches.len());
    Ok(ExternalJson(matches))
}

// GET /api/matches/:id
pub async fn get_match_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ExternalJson<Match>> {
    let fixture = state
        .store
        .find_match(&id)
        .await?
        .ok_or(AppError::NotFound("Match"))?;

    Ok(ExternalJson(fixture))
}

// POST /api/matches
pub async fn create_match(
    State(state): State<AppState>,
    ExternalJson(payload): ExternalJson<MatchPayload>,
) -> Result<(StatusCode, ExternalJson<Match>)> {
    payload.validate()?;

    let id = state.ids.mint(EntityKind::Match, state.now());
    let fixture = state.store.insert_match(payload.into_match(id)).await?;

    tracing::info!("✅ Created match {}", fixture.id);
    Ok((StatusCode::CREATED, ExternalJson(fixture)))
}

// PUT /api/matches/:id
//
// Full-record update. Every field comes from the payload except
// `elapsed_seconds`, which is reconciled from the stored timer.
pub async fn update_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ExternalJson(payload): ExternalJson<MatchPayload>,
) -> Result<ExternalJson<Match>> {
    payload.validate()?;

    let current = state
        .store
        .find_match(&id)
        .await?
        .ok_or(AppError::NotFound("Match"))?;

    let previous = current.timer();
    let wants_running = payload.wants_timer_running();
    let elapsed_seconds = reconcile_elapsed(&previous, wants_running, state.now());

    if TimerTransition::between(previous.timer_running, wants_running) == TimerTransition::Stop {
        tracing::info!(
            "⏱️ Timer stopped for match {}: elapsed {:?} -> {:?}",
            id,
            previous.elapsed_seconds,
            elapsed_seconds
        );
    }

    let mut desired = payload.into_match(id);
    desired.elapsed_seconds = elapsed_seconds;

    let updated = state
        .store
        .update_match(desired)
        .await?
        .ok_or(AppError::NotFound("Match"))?;

    Ok(ExternalJson(updated))
}

// DELETE /api/matches/:id
pub async fn delete_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let deleted = state.store.delete_match(&id).await?;

    tracing::info!("🗑️ Deleted match {} ({} row(s))", id, deleted);
    Ok(StatusCode::NO_CONTENT)
}
