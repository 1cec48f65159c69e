//! Error types for cache operations

use std::fmt;

/// Errors that can occur during cache operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CacheError {
    /// Lookups and inserts require a non-empty key
    #[error("Cache key must not be empty")]
    EmptyKey,

    /// Cache is disabled
    #[error("Cache is disabled")]
    CacheDisabled,
}

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// Error type for cache configuration validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigValidationError {
    /// capacity must be greater than 0
    InvalidCapacity,
    /// ttl must be greater than 0
    InvalidTtl,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity => write!(f, "capacity must be greater than 0"),
            Self::InvalidTtl => write!(f, "ttl must be greater than 0"),
        }
    }
}

impl std::error::Error for ConfigValidationError {}
