use thiserror::Error;

use crate::models::{BoundingBox, GeoPoint};

/// Earth's mean radius in miles
const EARTH_RADIUS_MILES: f64 = 3958.7613;

/// Meters per statute mile, the conversion the storage layer uses as well
pub const METERS_PER_MILE: f64 = 1609.34;

/// Miles spanned by one degree of latitude
const MILES_PER_DEGREE: f64 = 69.0;

/// A search area that cannot be queried
#[derive(Debug, Error, PartialEq)]
pub enum SearchAreaError {
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("invalid radius: {0} miles (must be greater than zero)")]
    InvalidRadius(f64),
}

/// Validate a center point and radius before running a proximity query
pub fn validate_search_area(center: GeoPoint, radius_miles: f64) -> Result<(), SearchAreaError> {
    if !center.is_valid() {
        return Err(SearchAreaError::InvalidCoordinate {
            latitude: center.latitude,
            longitude: center.longitude,
        });
    }
    if !radius_miles.is_finite() || radius_miles <= 0.0 {
        return Err(SearchAreaError::InvalidRadius(radius_miles));
    }
    Ok(())
}

/// Great-circle distance between two points in miles
#[inline]
pub fn haversine_miles(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Calculate a bounding box around a center point
///
/// Much cheaper than haversine for pre-filtering. One degree of latitude is
/// ~69 miles; one degree of longitude shrinks by cos(latitude).
pub fn calculate_bounding_box(center: GeoPoint, radius_miles: f64) -> BoundingBox {
    let lat_delta = radius_miles / MILES_PER_DEGREE;
    let lng_delta = radius_miles / (MILES_PER_DEGREE * center.latitude.to_radians().cos().abs());

    BoundingBox {
        min_lat: center.latitude - lat_delta,
        max_lat: center.latitude + lat_delta,
        min_lng: center.longitude - lng_delta,
        max_lng: center.longitude + lng_delta,
    }
}

/// Check if a point is within a bounding box
#[inline]
pub fn is_within_bounding_box(lat: f64, lng: f64, bbox: &BoundingBox) -> bool {
    lat >= bbox.min_lat && lat <= bbox.max_lat && lng >= bbox.min_lng && lng <= bbox.max_lng
}
