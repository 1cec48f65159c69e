//! Product loading

use async_trait::async_trait;
use std::sync::Arc;
use storefront_core::{CacheStats, ProductCache};

use super::types::ProductNode;
use crate::error::StorefrontResult;

/// Upstream catalogue API
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch a product by URL key; `Ok(None)` when it does not exist
    async fn fetch_product(&self, url_key: &str) -> StorefrontResult<Option<ProductNode>>;
}

/// Cache-aside product loader
#[derive(Clone)]
pub struct ProductService {
    cache: ProductCache<ProductNode>,
    source: Arc<dyn ProductSource>,
}

impl ProductService {
    pub fn new(cache: ProductCache<ProductNode>, source: Arc<dyn ProductSource>) -> Self {
        Self { cache, source }
    }

    /// Load a product, serving from the cache when possible
    ///
    /// Found products are cached under `url_key`. Missing products and
    /// upstream failures are not cached; failures are logged and reported
    /// as `None`.
    #[tracing::instrument(skip(self))]
    pub async fn get_single_product(&self, url_key: &str) -> Option<ProductNode> {
        if let Some(product) = self.cache.get(url_key).await {
            return Some(product);
        }

        match self.source.fetch_product(url_key).await {
            Ok(Some(product)) => {
                self.cache.set(url_key, product.clone()).await;
                Some(product)
            }
            Ok(None) => {
                tracing::debug!("product not found upstream");
                None
            }
            Err(error) => {
                tracing::error!(%error, "error fetching product");
                None
            }
        }
    }

    /// Drop a cached product so the next request refetches it
    pub async fn invalidate(&self, url_key: &str) -> bool {
        self.cache.invalidate(url_key).await
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }
}
