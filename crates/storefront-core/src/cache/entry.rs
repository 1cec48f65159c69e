//! Cache entry and key generation

use std::time::Duration;
use tokio::time::Instant;

/// Deadline used when `now + ttl` does not fit in an `Instant`
const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// A cached value with its expiration deadline
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The cached value
    pub value: T,
    /// When the entry stops being a valid hit
    pub expires_at: Instant,
}

impl<T> CacheEntry<T> {
    /// Create a new entry expiring `ttl` from now
    ///
    /// TTLs too large for the clock are capped at roughly a century.
    pub fn new(value: T, ttl: Duration) -> Self {
        let now = Instant::now();
        Self {
            value,
            expires_at: now
                .checked_add(ttl)
                .or_else(|| now.checked_add(FAR_FUTURE))
                .unwrap_or(now),
        }
    }

    /// Check if the entry has expired
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    /// Get the remaining TTL
    pub fn remaining_ttl(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}

/// Build the product cache key from catch-all route segments.
///
/// `["men", "shirt-red"]` becomes `"men/shirt-red"`. Empty segments are
/// dropped so stray slashes do not create distinct keys.
pub fn cache_key<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|s| s.as_ref().trim_matches('/'))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
