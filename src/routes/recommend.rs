// src/routes/recommend.rs

//! Recommendation Routes
//!
//! Provides the endpoint for fetching food recommendations.

use axum::{routing::post, Router};

use crate::api::recommend;
use crate::api::state::AppState;

/// Creates recommendation-related routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/recommend", post(recommend::get_recommendations))
}
