//! Fairway Algo - location-based golf club recommendation engine
//!
//! Given a ZIP code, a search radius and a golfer's stored preferences, this
//! library geocodes the ZIP code through an injected collaborator, queries a
//! geospatial store for clubs in range, scores every candidate with a
//! weighted multi-factor formula and returns a ranked, paginated list.
//!
//! The crate ships no HTTP surface; embed [`RecommendationService`] behind
//! whatever transport the application uses.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    calculate_bounding_box, calculate_recommendation_score, haversine_miles, RankedPage, Ranker,
};
pub use crate::models::{
    Club, ClubFilters, GeoPoint, GolferPreferences, RecommendationRequest, RecommendationResponse,
    ScoredClub, ScoringWeights,
};
pub use crate::services::{
    ClubStore, Geocoder, InMemoryClubStore, RecommendationError, RecommendationService,
};
