//! Application errors

use storefront_core::ConfigValidationError;
use thiserror::Error;

/// Errors surfaced by the product page layer
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// No product exists under the requested URL key
    #[error("product not found: {0}")]
    NotFound(String),

    /// The product source failed
    #[error("upstream request failed: {0}")]
    Upstream(String),

    /// Configuration could not be used
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Reading a file failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StorefrontError {
    /// Create an upstream error
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }
}

impl From<ConfigValidationError> for StorefrontError {
    fn from(error: ConfigValidationError) -> Self {
        Self::Config(error.to_string())
    }
}

impl From<toml::de::Error> for StorefrontError {
    fn from(error: toml::de::Error) -> Self {
        Self::Config(error.to_string())
    }
}

/// Result type for the application layer
pub type StorefrontResult<T> = Result<T, StorefrontError>;
