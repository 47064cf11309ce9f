use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur with cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cache miss: {0}")]
    CacheMiss(String),
}

/// In-memory TTL cache for feed snapshots and horoscope content.
///
/// Values are stored as serialized JSON so one cache can hold heterogeneous
/// snapshot types. Expiry is handled entirely by moka; a miss after the TTL
/// is how stale snapshots age out between refresh ticks.
pub struct ContentCache {
    inner: moka::future::Cache<String, Vec<u8>>,
}

impl ContentCache {
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let inner = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();
        Self { inner }
    }

    /// Get a value from the cache.
    pub async fn get<T>(&self, key: &str) -> Result<T, CacheError>
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(bytes) = self.inner.get(key).await {
            tracing::trace!("cache hit: {}", key);
            return Ok(serde_json::from_slice(&bytes)?);
        }
        tracing::trace!("cache miss: {}", key);
        Err(CacheError::CacheMiss(key.to_string()))
    }

    /// Set a value in the cache.
    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), CacheError>
    where
        T: Serialize,
    {
        let bytes = serde_json::to_vec(value)?;
        self.inner.insert(key.to_string(), bytes).await;
        tracing::trace!("cache set: {}", key);
        Ok(())
    }

    /// Drop a single entry.
    pub async fn invalidate(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}

/// Cache key builder so every caller spells keys the same way.
pub struct CacheKey;

impl CacheKey {
    pub fn leaderboard() -> String {
        "leaderboard:top".to_string()
    }

    pub fn engagement() -> String {
        "engagement:snapshot".to_string()
    }

    /// Readings vary within a sign by decan, so the decan is part of the key.
    pub fn horoscope(
        sign: crate::core::zodiac::ZodiacSign,
        decan: crate::core::horoscope::Decan,
        date: chrono::NaiveDate,
    ) -> String {
        format!("horoscope:{}:{}:{}", sign, decan, date)
    }
}
