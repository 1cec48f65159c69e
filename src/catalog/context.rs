//! Application context and services

use std::sync::Arc;
use storefront_core::ProductCache;

use super::service::{ProductService, ProductSource};
use crate::config::AppConfig;
use crate::error::StorefrontResult;

/// Application context passed to all handlers
#[derive(Clone)]
pub struct AppContext {
    /// Product loader with its cache
    pub products: ProductService,
}

impl AppContext {
    /// Build the context once at startup; clones share the product cache
    pub fn new(config: &AppConfig, source: Arc<dyn ProductSource>) -> StorefrontResult<Self> {
        let cache = ProductCache::new(config.cache_config()?);
        tracing::info!(
            capacity = cache.config().capacity,
            ttl_secs = cache.config().ttl.as_secs(),
            "product cache ready"
        );

        Ok(Self {
            products: ProductService::new(cache, source),
        })
    }
}
