//! Cache store implementation

use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::config::CacheConfig;
use super::entry::CacheEntry;
use super::error::{CacheError, CacheResult};
use super::metrics::CacheMetrics;

/// Thread-safe LRU cache with sliding TTL for product records
///
/// The most recently read or written entry sits at the front of the LRU
/// list; inserting a new key into a full cache evicts the back. Expired
/// entries are only removed when they are read, swept with
/// [`purge_expired`](Self::purge_expired), or evicted by the LRU policy, so
/// they can keep occupying a slot until then.
///
/// Clones share the same entries and metrics. Create one instance when the
/// server starts and hand clones to request handlers.
pub struct ProductCache<T> {
    pub(crate) config: CacheConfig,
    pub(crate) entries: Arc<RwLock<LruCache<String, CacheEntry<T>>>>,
    pub(crate) metrics: Arc<CacheMetrics>,
}

impl<T: Clone> ProductCache<T> {
    /// Create a new cache with the given configuration
    ///
    /// A capacity of zero is raised to one.
    pub fn new(config: CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            config,
            entries: Arc::new(RwLock::new(LruCache::new(capacity))),
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    /// Create a cache holding at most `capacity` entries for `ttl_minutes`
    pub fn with_capacity(capacity: usize, ttl_minutes: u64) -> Self {
        Self::new(CacheConfig::from_minutes(capacity, ttl_minutes))
    }

    /// The configuration this cache was built with
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Get a cached value if it exists and hasn't expired (with error handling)
    ///
    /// A hit promotes the entry to most recently used. An expired entry is
    /// removed on the spot and reported as a miss.
    ///
    /// Returns `Err(CacheError::EmptyKey)` for an empty key and
    /// `Err(CacheError::CacheDisabled)` if caching is disabled.
    #[tracing::instrument(skip(self, key), fields(enabled = %self.config.enabled))]
    pub async fn try_get(&self, key: &str) -> CacheResult<Option<T>> {
        if !self.config.enabled {
            tracing::trace!("cache disabled");
            return Err(CacheError::CacheDisabled);
        }
        if key.is_empty() {
            return Err(CacheError::EmptyKey);
        }

        let mut entries = self.entries.write().await;

        if let Some(entry) = entries.get(key) {
            if entry.is_expired() {
                entries.pop(key);
                tracing::debug!("cache entry expired");
                self.metrics.expired(1);
                self.metrics.miss();
                return Ok(None);
            }
            tracing::debug!("cache hit");
            self.metrics.hit();
            return Ok(Some(entry.value.clone()));
        }

        tracing::debug!("cache miss");
        self.metrics.miss();
        Ok(None)
    }

    /// Get a cached value if it exists and hasn't expired
    ///
    /// Convenience wrapper around `try_get()` that returns `None` on any error.
    pub async fn get(&self, key: &str) -> Option<T> {
        self.try_get(key).await.ok().flatten()
    }

    /// Store a value under `key` (with error handling)
    ///
    /// The entry expires one TTL from now. Writing an existing key replaces
    /// its value, restarts its TTL and promotes it without growing the cache.
    /// Writing a new key into a full cache evicts the least recently used
    /// entry first.
    #[tracing::instrument(skip(self, key, value), fields(enabled = %self.config.enabled))]
    pub async fn try_set(&self, key: &str, value: T) -> CacheResult<()> {
        if !self.config.enabled {
            tracing::trace!("cache disabled");
            return Err(CacheError::CacheDisabled);
        }
        if key.is_empty() {
            return Err(CacheError::EmptyKey);
        }

        let key = key.to_owned();
        let entry = CacheEntry::new(value, self.config.ttl);

        let mut entries = self.entries.write().await;

        // Must be checked under the lock, together with the insert.
        let will_evict = entries.len() >= entries.cap().get() && !entries.contains(&key);

        entries.put(key, entry);

        if will_evict {
            tracing::debug!("LRU eviction occurred");
            self.metrics.evicted();
        }

        tracing::trace!(ttl_ms = %self.config.ttl.as_millis(), "cache entry stored");
        Ok(())
    }

    /// Store a value under `key`
    ///
    /// Convenience wrapper around `try_set()` that silently ignores errors.
    pub async fn set(&self, key: &str, value: T) {
        let _ = self.try_set(key, value).await;
    }

    /// Remove a single entry, returning whether it was present
    #[tracing::instrument(skip(self, key))]
    pub async fn invalidate(&self, key: &str) -> bool {
        let mut entries = self.entries.write().await;
        if entries.pop(key).is_some() {
            tracing::debug!("cache entry invalidated");
            self.metrics.invalidated(1);
            true
        } else {
            tracing::trace!("cache entry not found for invalidation");
            false
        }
    }

    /// Remove every entry
    #[tracing::instrument(skip(self))]
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        let count = entries.len() as u64;
        entries.clear();

        if count > 0 {
            tracing::debug!(count = %count, "all cache entries invalidated");
            self.metrics.invalidated(count);
        }
    }

    /// Check if a live value is cached, without promoting or purging it
    pub async fn contains(&self, key: &str) -> bool {
        if !self.config.enabled {
            return false;
        }

        let entries = self.entries.read().await;
        entries.peek(key).is_some_and(|entry| !entry.is_expired())
    }

    /// Number of entries currently held, expired-but-unread ones included
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the cache holds no entries
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Remove expired entries and return how many were removed
    ///
    /// Nothing calls this automatically; the cache only expires lazily.
    ///
    /// # Performance
    ///
    /// - Time complexity: O(n) where n is the total number of cache entries
    /// - Acquires a write lock for the duration of the operation
    #[tracing::instrument(skip(self))]
    pub async fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write().await;

        let expired_keys: Vec<String> = entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();
        for key in expired_keys {
            entries.pop(&key);
        }

        if count > 0 {
            tracing::debug!(removed = %count, "expired entries purged");
            self.metrics.expired(count as u64);
        }

        count
    }

    /// Get cache statistics
    pub async fn stats(&self) -> CacheStats {
        let entries = self.entries.read().await;
        let counts = self.metrics.counts();

        CacheStats {
            total_entries: entries.len(),
            expired_entries: entries.iter().filter(|(_, e)| e.is_expired()).count(),
            capacity: entries.cap().get(),
            hits: counts.hits,
            misses: counts.misses,
            hit_ratio: counts.hit_ratio(),
            evictions: counts.evictions,
            expirations: counts.expirations,
            invalidations: counts.invalidations,
        }
    }

    /// Reset all metrics counters to zero
    pub fn reset_metrics(&self) {
        self.metrics.reset();
    }

    /// Ratio of hits to lookups, 0.0 before the first lookup
    pub fn get_hit_ratio(&self) -> f64 {
        self.metrics.counts().hit_ratio()
    }
}

impl<T> Clone for ProductCache<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            entries: self.entries.clone(),
            metrics: self.metrics.clone(),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    /// Total number of entries in the cache
    pub total_entries: usize,
    /// Number of expired entries still occupying a slot
    pub expired_entries: usize,
    /// Maximum number of entries allowed
    pub capacity: usize,
    /// Number of cache hits (since last reset)
    pub hits: u64,
    /// Number of cache misses (since last reset)
    pub misses: u64,
    /// Hit ratio (0.0 to 1.0)
    pub hit_ratio: f64,
    /// Total evictions due to LRU
    pub evictions: u64,
    /// Total expired entries removed
    pub expirations: u64,
    /// Total explicit removals
    pub invalidations: u64,
}
