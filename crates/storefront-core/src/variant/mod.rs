//! Variant resolution for configurable products
//!
//! Maps the attribute choices in a product URL (`?color=1&size=10`) to the
//! concrete variant they select and reports which options stay selectable
//! given the other choices.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_core::variant::{Combinations, parse_attribute_definitions, resolve};
//!
//! let attributes = parse_attribute_definitions(&product["superAttributeOptions"]);
//! let combinations = Combinations::from_payload(&product["combinations"]);
//!
//! let info = resolve(true, "color=1&size=10", &attributes, &combinations);
//! if let Some(variant) = info.variant_id {
//!     add_to_cart(&variant, info.in_stock);
//! }
//! ```
//!
//! Nothing in this module returns an error to its caller: dirty payloads and
//! odd query strings degrade to "nothing selected" and "nothing resolved".

mod auto_select;
mod combinations;
mod link;
mod payload;
mod resolver;
mod selection;
mod types;

pub use auto_select::auto_select_params;
pub use combinations::{Combinations, IndexedAttribute, IndexedOption};
pub use link::variant_link;
pub use payload::{PayloadError, parse_attribute_definitions, try_decode, try_parse_attribute_definitions};
pub use resolver::{
    ProductVariants, ResolvedAttribute, ResolvedOption, VariantInfo, resolve, resolve_records,
};
pub use selection::Selection;
pub use types::{AttributeDefinition, CombinationRecord, OptionId, OptionValue};

// =============================================================================
// Property-Based Tests
// =============================================================================
