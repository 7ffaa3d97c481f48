//! In-memory TTL cache and async memoization.
//!
//! Values are stored serialized so one cache instance can hold
//! heterogeneous entries (the catalog snapshot next to health-check
//! probes). A single mutex guards the map; it is never held while a
//! memoized computation runs.

use crate::core::config::CacheConfig;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::future::Future;
use std::hash::{Hash, Hasher};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

#[derive(Debug, Clone)]
struct CacheEntry {
    data: Vec<u8>,
    expires_at: Instant,
}

impl CacheEntry {
    fn new(data: Vec<u8>, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        now > self.expires_at
    }
}

/// Snapshot of cache state for health reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_items: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_ttl_secs: Option<u64>,
}

/// Key/value store with per-entry expiry
pub struct MemoryCache {
    enabled: bool,
    default_ttl: Duration,
    store: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    pub fn new(enabled: bool, default_ttl: Duration) -> Self {
        Self {
            enabled,
            default_ttl,
            store: Mutex::new(HashMap::new()),
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.enabled, Duration::from_secs(config.ttl_secs))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Fetch a live value; expired entries are pruned on read
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        if !self.enabled {
            return None;
        }

        let mut store = self.store.lock().await;
        let entry = store.get(key)?;

        if entry.is_expired(Instant::now()) {
            store.remove(key);
            return None;
        }

        let decoded = serde_json::from_slice::<T>(&entry.data);
        match decoded {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Dropping undecodable cache entry '{}': {}", key, e);
                store.remove(key);
                None
            }
        }
    }

    /// Whether a live entry exists, without decoding it
    pub async fn contains(&self, key: &str) -> bool {
        if !self.enabled {
            return false;
        }

        let mut store = self.store.lock().await;
        match store.get(key) {
            Some(entry) if entry.is_expired(Instant::now()) => {
                store.remove(key);
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    /// Store a value; `None` uses the default TTL, an explicit zero is honored
    pub async fn set<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
        ttl: Option<Duration>,
    ) -> crate::core::error::Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let data = serde_json::to_vec(value)?;
        let entry = CacheEntry::new(data, ttl.unwrap_or(self.default_ttl));

        self.store.lock().await.insert(key.to_string(), entry);
        Ok(())
    }

    pub async fn delete(&self, key: &str) {
        if !self.enabled {
            return;
        }
        self.store.lock().await.remove(key);
    }

    pub async fn clear(&self) {
        if !self.enabled {
            return;
        }
        self.store.lock().await.clear();
    }

    /// Sweep every expired entry, returning how many were removed
    pub async fn cleanup_expired(&self) -> usize {
        if !self.enabled {
            return 0;
        }

        let now = Instant::now();
        let mut store = self.store.lock().await;
        let before = store.len();
        store.retain(|_, entry| !entry.is_expired(now));
        let removed = before - store.len();
        drop(store);

        if removed > 0 {
            tracing::debug!("Cleaned up {} expired cache entries", removed);
        }
        removed
    }

    pub async fn stats(&self) -> CacheStats {
        if !self.enabled {
            return CacheStats {
                enabled: false,
                total_items: None,
                default_ttl_secs: None,
            };
        }

        CacheStats {
            enabled: true,
            total_items: Some(self.store.lock().await.len()),
            default_ttl_secs: Some(self.default_ttl.as_secs()),
        }
    }
}

/// Build a memoization key: `"{prefix}:{function}:{hash(args)}"`
pub fn cache_key<A: Hash + ?Sized>(prefix: &str, function: &str, args: &A) -> String {
    let mut hasher = DefaultHasher::new();
    args.hash(&mut hasher);
    format!("{prefix}:{function}:{:x}", hasher.finish())
}

/// Memoize an async computation under `key`
///
/// Returns the cached value when present, otherwise awaits `compute`
/// and caches its `Ok` result. Errors pass through uncached.
pub async fn cached<T, E, F>(
    cache: &MemoryCache,
    key: &str,
    ttl: Option<Duration>,
    compute: F,
) -> Result<T, E>
where
    T: Serialize + DeserializeOwned,
    F: Future<Output = Result<T, E>>,
{
    if let Some(hit) = cache.get::<T>(key).await {
        tracing::debug!("Cache hit: {}", key);
        return Ok(hit);
    }

    tracing::debug!("Cache miss: {}", key);
    let value = compute.await?;

    if let Err(e) = cache.set(key, &value, ttl).await {
        tracing::warn!("Failed to cache '{}': {}", key, e);
    }
    Ok(value)
}
