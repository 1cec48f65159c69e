//! Application configuration
//!
//! Loads optional TOML config from `<config dir>/storefront/config.toml`.
//!
//! ```toml
//! log_filter = "storefront=debug"
//!
//! [cache]
//! capacity = 100
//! ttl_minutes = 10
//! enabled = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use storefront_core::CacheConfig;

use crate::error::StorefrontResult;

/// Application configuration loaded from TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_filter: Option<String>,
    pub cache: CacheSection,
}

/// `[cache]` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSection {
    /// Maximum cached products (default: 100)
    pub capacity: Option<usize>,
    /// Product TTL in minutes (default: 10)
    pub ttl_minutes: Option<u64>,
    /// Whether the product cache is used at all (default: true)
    pub enabled: Option<bool>,
}

impl AppConfig {
    /// Default config file location
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_default()
            .join("storefront")
            .join("config.toml")
    }

    /// Load config from the default path, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = Self::default_path();
        match Self::from_path(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Err(crate::StorefrontError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Read and parse a config file
    pub fn from_path(path: &Path) -> StorefrontResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validated cache configuration
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Config` when capacity or TTL is zero.
    pub fn cache_config(&self) -> StorefrontResult<CacheConfig> {
        let mut config = CacheConfig::new();
        if let Some(capacity) = self.cache.capacity {
            config = config.with_capacity(capacity);
        }
        if let Some(ttl_minutes) = self.cache.ttl_minutes {
            config = config.with_ttl(Duration::from_secs(ttl_minutes.saturating_mul(60)));
        }
        if let Some(enabled) = self.cache.enabled {
            config = config.with_enabled(enabled);
        }
        config.validate()?;
        Ok(config)
    }
}
