//! Cache configuration

use std::time::Duration;

use super::error::ConfigValidationError;

/// Default number of products kept in memory
pub const DEFAULT_CAPACITY: usize = 100;

/// Default product lifetime in minutes, measured from the last insert
pub const DEFAULT_TTL_MINUTES: u64 = 10;

/// Configuration for the product cache
///
/// Capacity and TTL are fixed once the cache is built; the cache keeps its
/// own copy of the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries in the cache
    pub capacity: usize,
    /// Lifetime of an entry after its last insert
    pub ttl: Duration,
    /// Whether caching is enabled
    pub enabled: bool,
}

impl CacheConfig {
    /// Create a new cache configuration with defaults
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            ttl: minutes(DEFAULT_TTL_MINUTES),
            enabled: true,
        }
    }

    /// Create a configuration from a capacity and a TTL in minutes
    pub fn from_minutes(capacity: usize, ttl_minutes: u64) -> Self {
        Self::new()
            .with_capacity(capacity)
            .with_ttl(minutes(ttl_minutes))
    }

    /// Set the maximum number of entries
    #[must_use = "This method returns a new CacheConfig and does not modify self"]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the entry lifetime
    #[must_use = "This method returns a new CacheConfig and does not modify self"]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Enable or disable caching
    #[must_use = "This method returns a new CacheConfig and does not modify self"]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Validate the configuration and return an error if invalid.
    ///
    /// # Errors
    ///
    /// Returns an error if `capacity` or `ttl` is zero.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.capacity == 0 {
            return Err(ConfigValidationError::InvalidCapacity);
        }
        if self.ttl.is_zero() {
            return Err(ConfigValidationError::InvalidTtl);
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn minutes(value: u64) -> Duration {
    Duration::from_secs(value.saturating_mul(60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_config_defaults() {
        let config = CacheConfig::new();
        assert_eq!(config.capacity, 100);
        assert_eq!(config.ttl, Duration::from_secs(600));
        assert!(config.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cache_config_from_minutes() {
        let config = CacheConfig::from_minutes(2, 10);
        assert_eq!(config.capacity, 2);
        assert_eq!(config.ttl, Duration::from_secs(600));
    }

    #[test]
    fn test_cache_config_builder() {
        let config = CacheConfig::new()
            .with_capacity(5)
            .with_ttl(Duration::from_secs(30))
            .with_enabled(false);

        assert_eq!(config.capacity, 5);
        assert_eq!(config.ttl, Duration::from_secs(30));
        assert!(!config.enabled);
    }

    #[test]
    fn test_cache_config_validation() {
        assert_eq!(
            CacheConfig::new().with_capacity(0).validate(),
            Err(ConfigValidationError::InvalidCapacity)
        );
        assert_eq!(
            CacheConfig::new().with_ttl(Duration::ZERO).validate(),
            Err(ConfigValidationError::InvalidTtl)
        );
    }
}
