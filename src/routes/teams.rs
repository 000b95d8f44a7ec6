use axum::{
    routing::{delete, get},
    Router,
};

use crate::handlers::teams;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(teams::get_teams).post(teams::create_team))
        .route("/:id", delete(teams::delete_team))
}
