use std::time::Duration;

use redis::aio::ConnectionManager;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur with cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cache miss: {0}")]
    CacheMiss(String),
}

impl CacheError {
    pub fn is_miss(&self) -> bool {
        matches!(self, CacheError::CacheMiss(_))
    }
}

/// Cache key helpers, namespaced per concern
pub struct CacheKey;

impl CacheKey {
    pub fn geocode(zip_code: &str) -> String {
        format!("geocode:{}", zip_code)
    }
}

/// Two-tier cache
///
/// L1 (moka, in-process) answers the hot path; L2 (Redis) is shared across
/// instances. Values round-trip as JSON.
pub struct CacheManager {
    redis: ConnectionManager,
    l1_cache: moka::future::Cache<String, Vec<u8>>,
    ttl_secs: u64,
}

impl CacheManager {
    pub async fn new(redis_url: &str, l1_size: u64, ttl_secs: u64) -> Result<Self, CacheError> {
        let client = redis::Client::open(redis_url)?;
        let redis = ConnectionManager::new(client).await?;

        let l1_cache = moka::future::CacheBuilder::new(l1_size)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Ok(Self {
            redis,
            l1_cache,
            ttl_secs,
        })
    }

    /// Get a value (L1 first, then L2; L2 hits repopulate L1)
    pub async fn get<T>(&self, key: &str) -> Result<T, CacheError>
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(bytes) = self.l1_cache.get(key).await {
            tracing::trace!("L1 cache hit: {}", key);
            return Ok(serde_json::from_slice(&bytes)?);
        }

        // ConnectionManager multiplexes internally; a clone per call is the
        // intended usage.
        let mut conn = self.redis.clone();
        let value: Option<String> = redis::cmd("GET").arg(key).query_async(&mut conn).await?;

        if let Some(json) = value {
            tracing::trace!("L2 cache hit: {}", key);
            self.l1_cache
                .insert(key.to_string(), json.as_bytes().to_vec())
                .await;
            return Ok(serde_json::from_str(&json)?);
        }

        tracing::trace!("Cache miss: {}", key);
        Err(CacheError::CacheMiss(key.to_string()))
    }

    /// Set a value in both tiers; L2 carries an explicit TTL
    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), CacheError>
    where
        T: Serialize,
    {
        let json = serde_json::to_string(value)?;

        self.l1_cache
            .insert(key.to_string(), json.as_bytes().to_vec())
            .await;

        let mut conn = self.redis.clone();
        redis::cmd("SETEX")
            .arg(key)
            .arg(self.ttl_secs)
            .arg(json)
            .query_async::<()>(&mut conn)
            .await?;

        tracing::trace!("Cache set: {}", key);
        Ok(())
    }

    /// Delete a value from both tiers
    pub async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.l1_cache.invalidate(key).await;
        let mut conn = self.redis.clone();
        redis::cmd("DEL").arg(key).query_async::<()>(&mut conn).await?;
        Ok(())
    }
}
