//! Cache counters

use std::sync::atomic::{AtomicU64, Ordering};

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Counts {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
    pub invalidations: u64,
}

impl Counts {
    /// Hits over lookups, `0.0` before the first lookup
    pub fn hit_ratio(&self) -> f64 {
        match self.hits + self.misses {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }
}

/// Shared counters behind `CacheStats`
///
/// Expired lookups count as misses as well as expirations.
#[derive(Debug, Default)]
pub(crate) struct CacheMetrics {
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
    expirations: AtomicU64,
    invalidations: AtomicU64,
}

impl CacheMetrics {
    pub fn hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn evicted(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn expired(&self, count: u64) {
        self.expirations.fetch_add(count, Ordering::Relaxed);
    }

    pub fn invalidated(&self, count: u64) {
        self.invalidations.fetch_add(count, Ordering::Relaxed);
    }

    pub fn counts(&self) -> Counts {
        Counts {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            expirations: self.expirations.load(Ordering::Relaxed),
            invalidations: self.invalidations.load(Ordering::Relaxed),
        }
    }

    pub fn reset(&self) {
        for counter in [
            &self.hits,
            &self.misses,
            &self.evictions,
            &self.expirations,
            &self.invalidations,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_ratio() {
        let metrics = CacheMetrics::default();
        assert_eq!(metrics.counts().hit_ratio(), 0.0);

        metrics.hit();
        metrics.hit();
        metrics.hit();
        metrics.miss();
        assert_eq!(metrics.counts().hit_ratio(), 0.75);
    }

    #[test]
    fn test_reset() {
        let metrics = CacheMetrics::default();
        metrics.hit();
        metrics.miss();
        metrics.evicted();
        metrics.expired(2);
        metrics.invalidated(3);

        assert_eq!(
            metrics.counts(),
            Counts {
                hits: 1,
                misses: 1,
                evictions: 1,
                expirations: 2,
                invalidations: 3,
            }
        );

        metrics.reset();
        assert_eq!(metrics.counts(), Counts::default());
    }
}
