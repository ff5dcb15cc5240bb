use std::sync::Arc;

use thiserror::Error;
use validator::Validate;

use crate::config::SearchSettings;
use crate::core::distance::SearchAreaError;
use crate::core::Ranker;
use crate::models::{
    GolferPreferences, RecommendationRequest, RecommendationResponse, ScoringWeights,
};
use crate::services::geocoder::{GeocodeError, Geocoder};
use crate::services::store::{ClubStore, StoreError};

/// Request-level failures surfaced to the caller
///
/// Per-candidate scoring failures are not here on purpose: they are recovered
/// inside the ranking stage and the affected candidate is kept with score 0.
#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("failed to geocode ZIP code {zip_code}: {source}")]
    GeocodeFailed {
        zip_code: String,
        #[source]
        source: GeocodeError,
    },

    #[error("invalid radius: {0} miles")]
    InvalidRadius(f64),

    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("datastore unavailable: {0}")]
    DatastoreUnavailable(#[source] StoreError),
}

impl From<StoreError> for RecommendationError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::InvalidSearchArea(SearchAreaError::InvalidRadius(radius)) => {
                RecommendationError::InvalidRadius(radius)
            }
            StoreError::InvalidSearchArea(SearchAreaError::InvalidCoordinate {
                latitude,
                longitude,
            }) => RecommendationError::InvalidCoordinate {
                latitude,
                longitude,
            },
            other => RecommendationError::DatastoreUnavailable(other),
        }
    }
}

/// End-to-end recommendation pipeline
///
/// Resolves the ZIP code through the geocoder, pulls in-range candidates from
/// the club store, then ranks and paginates them. Stateless per request; the
/// collaborators are shared trait objects.
pub struct RecommendationService {
    geocoder: Arc<dyn Geocoder>,
    store: Arc<dyn ClubStore>,
    ranker: Ranker,
    search: SearchSettings,
}

impl RecommendationService {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        store: Arc<dyn ClubStore>,
        weights: ScoringWeights,
        search: SearchSettings,
    ) -> Self {
        Self {
            geocoder,
            store,
            ranker: Ranker::new(weights),
            search,
        }
    }

    /// Produce a ranked, paginated recommendation list
    pub async fn recommend(
        &self,
        request: &RecommendationRequest,
        preferences: &GolferPreferences,
    ) -> Result<RecommendationResponse, RecommendationError> {
        request
            .validate()
            .map_err(|e| RecommendationError::InvalidRequest(e.to_string()))?;

        let radius = request.radius.unwrap_or(self.search.default_radius_miles);
        if radius <= 0.0 || !radius.is_finite() {
            return Err(RecommendationError::InvalidRadius(radius));
        }
        let radius = radius.min(self.search.max_radius_miles);

        let limit = request
            .limit
            .unwrap_or(self.search.default_limit)
            .clamp(1, self.search.max_limit);

        let center = self
            .geocoder
            .resolve(&request.zip_code)
            .await
            .map_err(|source| RecommendationError::GeocodeFailed {
                zip_code: request.zip_code.clone(),
                source,
            })?;

        tracing::debug!(
            "geocoded ZIP {} to ({}, {})",
            request.zip_code,
            center.latitude,
            center.longitude
        );

        let candidates = self
            .store
            .find_within_radius(center, radius, &request.filters)
            .await?;

        tracing::debug!(
            "found {} candidates within {} miles of {}",
            candidates.len(),
            radius,
            request.zip_code
        );

        let page = self
            .ranker
            .rank(preferences, candidates, request.offset, limit);

        let response = RecommendationResponse {
            page: request.offset / limit + 1,
            total_pages: page.total.div_ceil(limit),
            total: page.total,
            results: page.results,
        };

        tracing::info!(
            "returning {} of {} clubs for ZIP {} (page {}/{})",
            response.results.len(),
            response.total,
            request.zip_code,
            response.page,
            response.total_pages
        );

        Ok(response)
    }
}
