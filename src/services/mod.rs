// Service exports
pub mod cache;
pub mod geocoder;
pub mod postgres;
pub mod recommendation;
pub mod store;

pub use cache::{CacheError, CacheKey, CacheManager};
pub use geocoder::{CachedGeocoder, GeocodeError, Geocoder, StaticGeocoder};
pub use postgres::PostgresClubStore;
pub use recommendation::{RecommendationError, RecommendationService};
pub use store::{ClubStore, InMemoryClubStore, StoreError};
