use serde::{Deserialize, Serialize};

use crate::models::domain::ScoredClub;

/// Response for a recommendation request
///
/// `results` is the paginated slice of the globally sorted candidate list;
/// `total` counts every candidate in range so callers can page through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub results: Vec<ScoredClub>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}

impl RecommendationResponse {
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            total: 0,
            page: 1,
            total_pages: 0,
        }
    }
}

/// Error payload surfaced to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
