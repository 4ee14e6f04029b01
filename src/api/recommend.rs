// src/api/recommend.rs

//! Recommendation API Handlers
//!
//! Implements the `/recommend` handler on top of RecommendationService.

use axum::{body::Bytes, extract::State, Json};
use tracing::debug;

use crate::api::state::AppState;
use crate::models::{RecommendRequest, RecommendResponse};

/// Returns food recommendations for the caller.
///
/// The body is decoded best-effort: the frontend sends location and
/// cuisine preferences, but until ranking is implemented nothing in the
/// body changes the answer, so a missing or malformed body is not an
/// error.
pub async fn get_recommendations(
    State(state): State<AppState>,
    body: Bytes,
) -> Json<RecommendResponse> {
    let request = serde_json::from_slice::<RecommendRequest>(&body).ok();
    if request.is_none() && !body.is_empty() {
        debug!("request body is not a recommendation request, ignoring");
    }

    let recommendations = state.recommender.recommend(request.as_ref());

    Json(RecommendResponse { recommendations })
}
