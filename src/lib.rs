use axum::{http::Method, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod convention;
pub mod database;
pub mod errors;
mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use handlers::health;
use state::AppState;

pub fn build_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .allow_credentials(false);

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_check))
        .route("/api/health", get(health::api_health_check))
        .nest("/api", routes::auth::routes())
        .nest("/api/leagues", routes::leagues::routes())
        .nest("/api/teams", routes::teams::routes())
        .nest("/api/matches", routes::matches::routes())
        .nest("/api/news", routes::news::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
