use axum::{
    routing::{delete, get},
    Router,
};

use crate::handlers::news;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(news::get_news).post(news::create_news))
        .route("/:id", delete(news::delete_news))
}
