use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::GeoPoint;
use crate::services::cache::{CacheKey, CacheManager};

/// Errors reported by a geocoding collaborator
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("no geocoding match for ZIP code {0}")]
    NoMatch(String),

    #[error("ZIP code {zip_code} resolved outside the supported country ({country_code})")]
    OutsideRegion {
        zip_code: String,
        country_code: String,
    },

    #[error("geocoding backend error: {0}")]
    Backend(String),
}

/// ZIP-to-coordinate resolver collaborator
///
/// Vendor integrations live with the embedding application; this crate only
/// fixes the contract and ships a table-backed implementation plus a caching
/// decorator.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve a ZIP/postal code to a WGS84 point
    async fn resolve(&self, zip_code: &str) -> Result<GeoPoint, GeocodeError>;
}

/// Table-backed geocoder
///
/// Serves lookups from an in-memory ZIP table. Useful offline, in tests, and
/// for deployments that preload a postal-code dataset.
pub struct StaticGeocoder {
    table: HashMap<String, GeoPoint>,
    country_code: String,
}

impl StaticGeocoder {
    pub fn new(entries: impl IntoIterator<Item = (String, GeoPoint)>) -> Self {
        Self {
            table: entries.into_iter().collect(),
            country_code: "US".to_string(),
        }
    }

    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }

    /// Entries whose points fall outside WGS84 bounds are reported as
    /// outside the supported region, mirroring the country filter a vendor
    /// geocoder applies.
    fn lookup(&self, zip_code: &str) -> Result<GeoPoint, GeocodeError> {
        let point = self
            .table
            .get(zip_code)
            .copied()
            .ok_or_else(|| GeocodeError::NoMatch(zip_code.to_string()))?;

        if !point.is_valid() {
            return Err(GeocodeError::OutsideRegion {
                zip_code: zip_code.to_string(),
                country_code: self.country_code.clone(),
            });
        }

        Ok(point)
    }
}

#[async_trait]
impl Geocoder for StaticGeocoder {
    async fn resolve(&self, zip_code: &str) -> Result<GeoPoint, GeocodeError> {
        self.lookup(zip_code)
    }
}

/// Caching decorator for any geocoder
///
/// ZIP centroids never move, so resolved points are cached aggressively.
/// Cache trouble degrades to the inner geocoder with a logged warning and is
/// never surfaced to the caller.
pub struct CachedGeocoder<G> {
    inner: G,
    cache: Arc<CacheManager>,
}

impl<G: Geocoder> CachedGeocoder<G> {
    pub fn new(inner: G, cache: Arc<CacheManager>) -> Self {
        Self { inner, cache }
    }
}

#[async_trait]
impl<G: Geocoder> Geocoder for CachedGeocoder<G> {
    async fn resolve(&self, zip_code: &str) -> Result<GeoPoint, GeocodeError> {
        let key = CacheKey::geocode(zip_code);

        match self.cache.get::<GeoPoint>(&key).await {
            Ok(point) => return Ok(point),
            Err(e) if !e.is_miss() => {
                tracing::warn!("geocode cache read failed for {}: {}", zip_code, e);
            }
            Err(_) => {}
        }

        let point = self.inner.resolve(zip_code).await?;

        if let Err(e) = self.cache.set(&key, &point).await {
            tracing::warn!("geocode cache write failed for {}: {}", zip_code, e);
        }

        Ok(point)
    }
}
