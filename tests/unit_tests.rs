// Unit tests for Fairway Algo

use fairway_algo::core::{
    calculate_bounding_box, calculate_recommendation_score, haversine_miles,
    is_within_bounding_box,
};
use fairway_algo::models::{
    Amenities, Club, Difficulty, GeoPoint, GolferPreferences, PriceTier, ScoringWeights, Services,
};
use uuid::Uuid;

fn make_club(price: Option<PriceTier>, difficulty: Option<Difficulty>) -> Club {
    Club {
        id: Uuid::new_v4(),
        club_name: "Test Club".to_string(),
        address: "1 Fairway Dr".to_string(),
        city: "Warren".to_string(),
        state: "MI".to_string(),
        zip_code: "48091".to_string(),
        latitude: 42.4734,
        longitude: -83.0577,
        price_tier: price,
        difficulty,
        number_of_holes: Some("18".to_string()),
        club_membership: Some("Public".to_string()),
        amenities: Amenities::default(),
        services: Services::default(),
        technologies: vec![],
        updated_at: None,
    }
}

#[test]
fn test_haversine_zero() {
    let d = haversine_miles(42.4734, -83.0577, 42.4734, -83.0577);
    assert!(d < 0.01);
}

#[test]
fn test_haversine_chicago_to_detroit() {
    // Roughly 238 miles
    let d = haversine_miles(41.8781, -87.6298, 42.3314, -83.0458);
    assert!((d - 238.0).abs() < 10.0, "expected ~238 miles, got {}", d);
}

#[test]
fn test_bounding_box_contains_radius() {
    let center = GeoPoint::new(42.4734, -83.0577);
    let bbox = calculate_bounding_box(center, 10.0);

    assert!(is_within_bounding_box(center.latitude, center.longitude, &bbox));
    // A point ~7 miles north is still inside
    assert!(is_within_bounding_box(center.latitude + 0.1, center.longitude, &bbox));
    // A point ~70 miles north is not
    assert!(!is_within_bounding_box(center.latitude + 1.0, center.longitude, &bbox));
}

#[test]
fn test_full_weighted_scenario() {
    // Distance 5 miles, exact price + difficulty match, 3 of 6 amenities,
    // 2 of 5 services: 23.75 + 25 + 20 + 7.5 + 6 = 82.25
    let mut club = make_club(Some(PriceTier::Mid), Some(Difficulty::Medium));
    club.amenities = Amenities {
        driving_range: true,
        putting_green: true,
        restaurant: true,
        ..Default::default()
    };
    club.services = Services {
        motor_cart: true,
        pull_cart: true,
        ..Default::default()
    };

    let preferences = GolferPreferences {
        preferred_price_range: Some(PriceTier::Mid),
        preferred_difficulty: Some(Difficulty::Medium),
        amenities: club.amenities,
        services: club.services,
        ..Default::default()
    };

    let score =
        calculate_recommendation_score(&club, &preferences, 5.0, &ScoringWeights::default())
            .unwrap();
    assert_eq!(score, 82.25);
}

#[test]
fn test_empty_preferences_distance_fallback() {
    let club = make_club(Some(PriceTier::Premium), Some(Difficulty::Hard));

    let score = calculate_recommendation_score(
        &club,
        &GolferPreferences::default(),
        20.0,
        &ScoringWeights::default(),
    )
    .unwrap();
    assert_eq!(score, 80.00);
}

#[test]
fn test_score_always_in_bounds() {
    let weights = ScoringWeights::default();
    let preferences = GolferPreferences {
        preferred_price_range: Some(PriceTier::Budget),
        preferred_difficulty: Some(Difficulty::Easy),
        ..Default::default()
    };

    let tiers = [None, Some(PriceTier::Budget), Some(PriceTier::Premium)];
    let difficulties = [None, Some(Difficulty::Easy), Some(Difficulty::Hard)];
    for price in tiers {
        for difficulty in difficulties {
            for distance in [0.0, 12.5, 99.9, 100.0, 1000.0] {
                let club = make_club(price, difficulty);
                let score =
                    calculate_recommendation_score(&club, &preferences, distance, &weights)
                        .unwrap();
                assert!(
                    (0.0..=100.0).contains(&score),
                    "score {} out of bounds",
                    score
                );
            }
        }
    }
}

#[test]
fn test_exact_match_floor_before_facilities() {
    let club = make_club(Some(PriceTier::Mid), Some(Difficulty::Medium));
    let preferences = GolferPreferences {
        preferred_price_range: Some(PriceTier::Mid),
        preferred_difficulty: Some(Difficulty::Medium),
        ..Default::default()
    };

    // Exact price + difficulty at zero distance: at least 25 + 25 + 20
    let score =
        calculate_recommendation_score(&club, &preferences, 0.0, &ScoringWeights::default())
            .unwrap();
    assert!(score >= 70.0);
}

#[test]
fn test_distance_component_monotonic() {
    let club = make_club(Some(PriceTier::Mid), Some(Difficulty::Medium));
    let preferences = GolferPreferences {
        preferred_price_range: Some(PriceTier::Mid),
        ..Default::default()
    };
    let weights = ScoringWeights::default();

    let mut previous = f64::INFINITY;
    for distance in [0.0, 0.5, 3.0, 10.0, 40.0, 80.0, 100.0, 150.0] {
        let score =
            calculate_recommendation_score(&club, &preferences, distance, &weights).unwrap();
        assert!(
            score <= previous,
            "distance {} increased the score",
            distance
        );
        previous = score;
    }
}
