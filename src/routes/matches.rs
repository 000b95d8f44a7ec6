use axum::{routing::get, Router};

use crate::handlers::matches;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        // GET /api/matches - all matches, newest kick-off first
        // POST /api/matches - create a match
        .route("/", get(matches::get_matches).post(matches::create_match))
        // PUT reconciles the match timer before persisting
        .route(
            "/:id",
            get(matches::get_match_by_id)
                .put(matches::update_match)
                .delete(matches::delete_match),
        )
}
