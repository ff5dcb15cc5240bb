use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::ClubFilters;

/// Request for ranked club recommendations
///
/// `radius` is in miles; unset fields fall back to the configured search
/// defaults. Hard filters ride along in `filters` and exclude non-matching
/// clubs before scoring.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationRequest {
    #[validate(length(min = 3, max = 10))]
    pub zip_code: String,
    #[validate(range(min = 1.0, max = 100.0))]
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub filters: ClubFilters,
}

impl RecommendationRequest {
    /// Bare request with no filters and default pagination
    pub fn for_zip(zip_code: impl Into<String>) -> Self {
        Self {
            zip_code: zip_code.into(),
            radius: None,
            limit: None,
            offset: 0,
            filters: ClubFilters::default(),
        }
    }
}
