//! Bounded product cache
//!
//! Fixed-capacity, in-memory cache with least-recently-used eviction and a
//! per-entry TTL that restarts on every insert. Used by the product loader to
//! skip upstream lookups for recently viewed products.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_core::cache::{ProductCache, cache_key};
//!
//! let cache: ProductCache<Product> = ProductCache::with_capacity(100, 10);
//! let key = cache_key(&["men", "shirt-red"]);
//!
//! if let Some(product) = cache.get(&key).await {
//!     return Some(product);
//! }
//! let product = fetch(&key).await?;
//! cache.set(&key, product.clone()).await;
//! ```
//!
//! # Tracing
//!
//! - **Debug level**: hits, misses, expirations, evictions, invalidations
//! - **Trace level**: disabled-cache short circuits and stored TTLs
//!
//! Keys are not recorded in spans.

mod config;
mod entry;
mod error;
mod metrics;
mod store;

pub use config::{CacheConfig, DEFAULT_CAPACITY, DEFAULT_TTL_MINUTES};
pub use entry::{CacheEntry, cache_key};
pub use error::{CacheError, CacheResult, ConfigValidationError};
pub use store::{CacheStats, ProductCache};

// =============================================================================
// Property-Based Tests
// =============================================================================
