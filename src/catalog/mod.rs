//! Catalogue: product types, loading, and the product page

mod context;
mod enquiry;
mod handlers;
mod service;
mod settings;
mod types;

pub use context::*;
pub use enquiry::*;
pub use handlers::*;
pub use service::*;
pub use settings::*;
pub use types::*;
