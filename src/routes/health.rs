// src/routes/health.rs

//! Health Check Routes
//!
//! Provides the root acknowledgment endpoint the frontend pings on load.

use axum::{routing::get, Json, Router};

use crate::api::state::AppState;
use crate::models::HealthResponse;

/// Health check endpoint.
/// Confirms the backend is up and reachable.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Backend working!".to_string(),
    })
}

/// Creates health-related routes and merges them into the main router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}
