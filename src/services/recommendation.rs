// src/services/recommendation.rs

//! Food recommendation service.
//!
//! Ranking is not implemented yet; every request gets the default list.
//! The request parameter is already threaded through so the handler
//! signature stays stable once real scoring lands.

use tracing::debug;

use crate::models::RecommendRequest;

/// The list served until a real recommendation engine exists.
const DEFAULT_RECOMMENDATIONS: [&str; 3] = ["Pizza", "Sushi", "Biryani"];

pub struct RecommendationService;

impl RecommendationService {
    pub fn new() -> Self {
        RecommendationService
    }

    /// Produces recommendations for a caller.
    ///
    /// The caller's preferences, when present, are logged but not yet
    /// consulted. The returned order is stable.
    pub fn recommend(&self, request: Option<&RecommendRequest>) -> Vec<String> {
        if let Some(req) = request {
            debug!(
                latitude = req.latitude,
                longitude = req.longitude,
                cuisine = req.cuisine.as_deref(),
                "received recommendation preferences"
            );
        }

        DEFAULT_RECOMMENDATIONS
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

impl Default for RecommendationService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_default_list_without_preferences() {
        let service = RecommendationService::new();
        assert_eq!(
            service.recommend(None),
            vec!["Pizza", "Sushi", "Biryani"]
        );
    }

    #[test]
    fn preferences_do_not_change_the_list() {
        let service = RecommendationService::new();
        let request = RecommendRequest {
            latitude: 12.97,
            longitude: 77.59,
            cuisine: Some("italian".to_string()),
        };
        assert_eq!(
            service.recommend(Some(&request)),
            service.recommend(None)
        );
    }
}
