// src/models/mod.rs

//! # Models Module
//!
//! Request and response payload types shared by the API handlers.

use serde::{Deserialize, Serialize};

/// Body of the root health-check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: String,
}

/// Preferences the frontend posts to `/recommend`.
///
/// Matches the payload built in the frontend's api service: a location
/// plus an optional cuisine filter. Currently only logged.
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub cuisine: Option<String>,
}

/// Body of the `/recommend` response.
#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<String>,
}
