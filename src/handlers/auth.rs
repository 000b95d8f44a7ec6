use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
}

// POST /api/login
// A fixed admin pair gate for the dashboard, not an account system.
// Missing fields and unreadable bodies are just credentials that don't match.
pub async fn login(
    State(state): State<AppState>,
    payload: Option<Json<LoginRequest>>,
) -> (StatusCode, Json<LoginResponse>) {
    let Json(payload) = payload.unwrap_or_default();
    let username = payload.username.as_deref();
    let password = payload.password.as_deref();

    match (username, password) {
        (Some(username), Some(password)) if state.admin.matches(username, password) => {
            tracing::info!("🔐 Admin login accepted for {}", username);
            (
                StatusCode::OK,
                Json(LoginResponse {
                    message: "Login successful",
                }),
            )
        }
        _ => {
            tracing::warn!("🔐 Admin login rejected for {}", username.unwrap_or("<none>"));
            (
                StatusCode::UNAUTHORIZED,
                Json(LoginResponse {
                    message: "Invalid credentials",
                }),
            )
        }
    }
}
