// src/api/state.rs

//! # Application State
//!
//! Defines the shared state that will be accessible by all route handlers.

use std::sync::Arc;

use crate::services::recommendation::RecommendationService;

/// The core application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    // The service that will eventually own recommendation ranking.
    pub recommender: Arc<RecommendationService>,
}

impl AppState {
    /// Creates a new instance of the application state.
    pub fn new() -> Self {
        AppState {
            recommender: Arc::new(RecommendationService::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
