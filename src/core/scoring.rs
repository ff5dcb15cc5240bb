use thiserror::Error;

use crate::core::filters::shared_technology_count;
use crate::models::{Amenities, Club, GolferPreferences, ScoringWeights, Services};

/// Distances at or beyond this contribute zero to the distance component
const DISTANCE_CEILING_MILES: f64 = 100.0;

/// A candidate that cannot be scored
///
/// Sparse data never raises; only an unusable distance does. The ranking
/// layer recovers from this per candidate.
#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("invalid distance: {0} miles")]
    InvalidDistance(f64),
}

/// Calculate a recommendation score (0-100) for a club against a golfer's
/// preferences
///
/// Weighted components:
/// - distance   x 0.25  (linear decay, zero at 100 miles)
/// - price      x 0.25  (exact tier 100, adjacent 50, else 0)
/// - difficulty x 0.20  (exact 100, adjacent 50, else 0)
/// - amenities  x 0.15  (matched flags / 6)
/// - services   x 0.15  (matched flags / 5)
///
/// Shared technology tags add `technology_bonus` points each on top of the
/// blend. Preferences with no signal at all fall back to the pure distance
/// score. The result is clamped to [0, 100] and rounded to two decimals.
pub fn calculate_recommendation_score(
    club: &Club,
    preferences: &GolferPreferences,
    distance_miles: f64,
    weights: &ScoringWeights,
) -> Result<f64, ScoringError> {
    if !distance_miles.is_finite() || distance_miles < 0.0 {
        return Err(ScoringError::InvalidDistance(distance_miles));
    }

    let distance_score = calculate_distance_score(distance_miles);

    // Incomplete-profile fallback: no preference signal means nothing to
    // blend, so distance alone decides the ranking.
    if preferences.is_empty() {
        return Ok(round2(distance_score));
    }

    let price_score = match (club.price_tier, preferences.preferred_price_range) {
        (Some(have), Some(want)) => ordinal_score(have.level(), want.level()),
        _ => 0.0,
    };

    let difficulty_score = match (club.difficulty, preferences.preferred_difficulty) {
        (Some(have), Some(want)) => ordinal_score(have.level(), want.level()),
        _ => 0.0,
    };

    let amenity_score = calculate_amenity_score(&club.amenities, &preferences.amenities);
    let service_score = calculate_service_score(&club.services, &preferences.services);

    let mut total = distance_score * weights.distance
        + price_score * weights.price
        + difficulty_score * weights.difficulty
        + amenity_score * weights.amenities
        + service_score * weights.services;

    if !preferences.technologies.is_empty() {
        let shared = shared_technology_count(&club.technologies, &preferences.technologies);
        total += shared as f64 * weights.technology_bonus;
    }

    Ok(round2(total.clamp(0.0, 100.0)))
}

/// Distance component (0-100), linear decay to zero at 100 miles
#[inline]
pub fn calculate_distance_score(distance_miles: f64) -> f64 {
    (1.0 - distance_miles.min(DISTANCE_CEILING_MILES) / DISTANCE_CEILING_MILES) * 100.0
}

/// Ordinal partial credit: exact level 100, adjacent level 50, else 0
#[inline]
fn ordinal_score(have: i8, want: i8) -> f64 {
    match (have - want).abs() {
        0 => 100.0,
        1 => 50.0,
        _ => 0.0,
    }
}

/// Amenity component: matched flags over the six canonical flags
#[inline]
fn calculate_amenity_score(club: &Amenities, wanted: &Amenities) -> f64 {
    club.matching_count(wanted) as f64 / Amenities::COUNT as f64 * 100.0
}

/// Service component: matched flags over the five canonical flags
#[inline]
fn calculate_service_score(club: &Services, wanted: &Services) -> f64 {
    club.matching_count(wanted) as f64 / Services::COUNT as f64 * 100.0
}

#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
