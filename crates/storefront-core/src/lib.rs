#![warn(missing_docs)]
//! # Storefront core
//!
//! The two pieces of the product page that hold real logic:
//!
//! - **[`cache`]**: a bounded, in-memory product cache with LRU eviction and
//!   a TTL that restarts on every insert.
//! - **[`variant`]**: resolution of configurable-product attribute choices
//!   (taken from the URL query) to a concrete variant, plus per-option
//!   availability.
//!
//! [`swatch`] maps colour option labels to the hex codes used by the colour
//! selector.
//!
//! Both main components are leaves: the cache knows nothing about products
//! and the resolver performs no I/O.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────┐      ┌──────────────────────────────┐
//! │ product loader (app)         │      │ product page view (app)      │
//! └──────────────┬───────────────┘      └──────────────┬───────────────┘
//!                │ get / set                           │ resolve(query)
//!                ▼                                     ▼
//! ┌──────────────────────────────┐      ┌──────────────────────────────┐
//! │ ProductCache<T>              │      │ Selection ─► resolve_records │
//! │  LruCache + RwLock + metrics │      │ Combinations ─► records      │
//! └──────────────────────────────┘      └──────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use storefront_core::prelude::*;
//!
//! let cache: ProductCache<Product> = ProductCache::with_capacity(100, 10);
//!
//! let attributes = parse_attribute_definitions(&payload["superAttributeOptions"]);
//! let combinations = Combinations::from_payload(&payload["combinations"]);
//! let info = resolve(true, "color=1&size=10", &attributes, &combinations);
//! ```

pub mod cache;
pub mod swatch;
pub mod variant;

#[cfg(test)]
mod tests;

pub use cache::{
    CacheConfig, CacheEntry, CacheError, CacheResult, CacheStats, ConfigValidationError,
    ProductCache, cache_key,
};
pub use variant::{
    AttributeDefinition, CombinationRecord, Combinations, OptionId, OptionValue, ProductVariants,
    Selection, VariantInfo, auto_select_params, parse_attribute_definitions, resolve,
    variant_link,
};

/// Prelude for convenient imports
///
/// ```rust,ignore
/// use storefront_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Cache
        CacheConfig,
        CacheError,
        CacheResult,
        CacheStats,
        ProductCache,
        cache_key,
        // Variants
        AttributeDefinition,
        Combinations,
        OptionId,
        OptionValue,
        ProductVariants,
        Selection,
        VariantInfo,
        auto_select_params,
        parse_attribute_definitions,
        resolve,
        variant_link,
    };
}
