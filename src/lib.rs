//! Storefront application
//!
//! Wires the product cache and the variant resolver from `storefront-core`
//! into the product page.

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;

pub use catalog::{AppContext, ProductPage, ProductService, ProductSource, product_page};
pub use config::AppConfig;
pub use error::{StorefrontError, StorefrontResult};
