use async_trait::async_trait;
use thiserror::Error;

use crate::core::distance::{
    calculate_bounding_box, haversine_miles, is_within_bounding_box, validate_search_area,
    SearchAreaError,
};
use crate::core::filters::matches_filters;
use crate::models::{Club, ClubFilters, GeoPoint};

/// Errors reported by a club store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    InvalidSearchArea(#[from] SearchAreaError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Geospatial club store collaborator
///
/// The proximity-query contract: every club within `radius_miles` of the
/// center that satisfies the hard filters, each annotated with its
/// great-circle distance in miles. Ordering is unspecified - ranking is the
/// pipeline's job. An empty result is success.
#[async_trait]
pub trait ClubStore: Send + Sync {
    async fn find_within_radius(
        &self,
        center: GeoPoint,
        radius_miles: f64,
        filters: &ClubFilters,
    ) -> Result<Vec<(Club, f64)>, StoreError>;
}

/// In-process club store
///
/// Runs the proximity query over an in-memory club list: bounding-box
/// pre-filter, then exact haversine distance, then the hard filters. Backs
/// tests and deployments small enough to hold their catalog in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClubStore {
    clubs: Vec<Club>,
}

impl InMemoryClubStore {
    pub fn new(clubs: Vec<Club>) -> Self {
        Self { clubs }
    }

    pub fn len(&self) -> usize {
        self.clubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }
}

#[async_trait]
impl ClubStore for InMemoryClubStore {
    async fn find_within_radius(
        &self,
        center: GeoPoint,
        radius_miles: f64,
        filters: &ClubFilters,
    ) -> Result<Vec<(Club, f64)>, StoreError> {
        validate_search_area(center, radius_miles)?;

        let bbox = calculate_bounding_box(center, radius_miles);

        let results = self
            .clubs
            .iter()
            .filter(|club| is_within_bounding_box(club.latitude, club.longitude, &bbox))
            .filter(|club| matches_filters(club, filters))
            .filter_map(|club| {
                let distance = haversine_miles(
                    center.latitude,
                    center.longitude,
                    club.latitude,
                    club.longitude,
                );
                (distance <= radius_miles).then(|| (club.clone(), distance))
            })
            .collect();

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amenities, Difficulty, PriceTier, Services};
    use uuid::Uuid;

    fn club_at(name: &str, lat: f64, lng: f64) -> Club {
        Club {
            id: Uuid::new_v4(),
            club_name: name.to_string(),
            address: "1 Fairway Dr".to_string(),
            city: "Warren".to_string(),
            state: "MI".to_string(),
            zip_code: "48091".to_string(),
            latitude: lat,
            longitude: lng,
            price_tier: Some(PriceTier::Mid),
            difficulty: Some(Difficulty::Medium),
            number_of_holes: Some("18".to_string()),
            club_membership: Some("Public".to_string()),
            amenities: Amenities::default(),
            services: Services::default(),
            technologies: vec![],
            updated_at: None,
        }
    }

    // Warren, MI
    fn center() -> GeoPoint {
        GeoPoint::new(42.4734, -83.0577)
    }

    #[tokio::test]
    async fn test_finds_clubs_within_radius() {
        let store = InMemoryClubStore::new(vec![
            club_at("near", 42.48, -83.06),     // ~1 mile
            club_at("in range", 42.60, -83.05), // ~9 miles
            club_at("too far", 43.60, -83.05),  // ~78 miles
        ]);

        let results = store
            .find_within_radius(center(), 25.0, &ClubFilters::default())
            .await
            .unwrap();

        let names: Vec<&str> = results.iter().map(|(c, _)| c.club_name.as_str()).collect();
        assert_eq!(results.len(), 2);
        assert!(names.contains(&"near"));
        assert!(names.contains(&"in range"));
    }

    #[tokio::test]
    async fn test_annotates_distance() {
        let store = InMemoryClubStore::new(vec![club_at("here", 42.4734, -83.0577)]);

        let results = store
            .find_within_radius(center(), 10.0, &ClubFilters::default())
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert!(results[0].1 < 0.01);
    }

    #[tokio::test]
    async fn test_hard_filters_exclude() {
        let mut premium = club_at("premium", 42.48, -83.06);
        premium.price_tier = Some(PriceTier::Premium);
        let store = InMemoryClubStore::new(vec![club_at("mid", 42.49, -83.06), premium]);

        let filters = ClubFilters {
            price_tier: Some(PriceTier::Mid),
            ..Default::default()
        };
        let results = store
            .find_within_radius(center(), 25.0, &filters)
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0.club_name, "mid");
    }

    #[tokio::test]
    async fn test_empty_result_is_success() {
        let store = InMemoryClubStore::new(vec![]);

        let results = store
            .find_within_radius(center(), 25.0, &ClubFilters::default())
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_radius_rejected() {
        let store = InMemoryClubStore::new(vec![]);

        let err = store
            .find_within_radius(center(), -1.0, &ClubFilters::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidSearchArea(SearchAreaError::InvalidRadius(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_coordinate_rejected() {
        let store = InMemoryClubStore::new(vec![]);

        let err = store
            .find_within_radius(GeoPoint::new(120.0, 0.0), 10.0, &ClubFilters::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidSearchArea(SearchAreaError::InvalidCoordinate { .. })
        ));
    }
}
