// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Amenities, BoundingBox, Club, ClubFilters, Difficulty, GeoPoint, GolferPreferences, PriceTier,
    ScoredClub, ScoringWeights, Services,
};
pub use requests::RecommendationRequest;
pub use responses::{ErrorResponse, RecommendationResponse};
