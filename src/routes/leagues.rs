use axum::{
    routing::{delete, get},
    Router,
};

use crate::handlers::leagues;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(leagues::get_leagues).post(leagues::create_league))
        .route("/:id", delete(leagues::delete_league))
}
