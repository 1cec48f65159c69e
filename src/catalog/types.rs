//! Product page types
//!
//! Field names follow the catalogue API (`camelCase`).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use storefront_core::{Combinations, ProductVariants, VariantInfo, parse_attribute_definitions};

// =============================================================================
// Product Types
// =============================================================================

/// Product as returned by the catalogue API
///
/// `superAttributeOptions` and `combinations` are kept raw: the API sends
/// them either as JSON or as JSON encoded in a string, and
/// [`ProductNode::variant_model`] decodes both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductNode {
    /// IRI such as `/api/shop/products/42`
    pub id: String,
    pub sku: Option<String>,
    #[serde(rename = "type")]
    pub product_type: Option<String>,
    pub name: String,
    pub url_key: String,
    pub price: Option<Value>,
    pub minimum_price: Option<Value>,
    pub special_price: Option<Value>,
    pub base_image_url: Option<String>,
    pub is_saleable: Option<Value>,
    pub super_attribute_options: Value,
    pub combinations: Value,
    pub variants: Connection<VariantNode>,
}

impl ProductNode {
    pub fn is_configurable(&self) -> bool {
        self.product_type.as_deref() == Some("configurable")
    }

    /// Saleable flag; the API sends a bool, a number or `"1"`
    pub fn saleable(&self) -> bool {
        match &self.is_saleable {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
            Some(Value::String(s)) => matches!(s.trim(), "1" | "true"),
            _ => false,
        }
    }

    /// Minimum price, or the plain price when the minimum is unset
    pub fn base_price(&self) -> Option<String> {
        price_text(self.minimum_price.as_ref()).or_else(|| price_text(self.price.as_ref()))
    }

    /// Decoded attributes and combinations ready for resolution
    pub fn variant_model(&self) -> ProductVariants {
        ProductVariants {
            configurable: self.is_configurable(),
            saleable: self.saleable(),
            attributes: parse_attribute_definitions(&self.super_attribute_options),
            combinations: Combinations::from_payload(&self.combinations),
        }
    }

    /// Child product whose id is `variant_id` or ends with it
    pub fn variant_node(&self, variant_id: &str) -> Option<&VariantNode> {
        self.variants.nodes().find(|node| {
            node.id == variant_id || node.id.rsplit('/').next() == Some(variant_id)
        })
    }
}

/// Child product of a configurable product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariantNode {
    pub id: String,
    pub sku: Option<String>,
    pub price: Option<Value>,
    pub base_image_url: Option<String>,
}

/// GraphQL connection (`{ edges: [{ node }] }`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection<T> {
    #[serde(default)]
    pub edges: Vec<Edge<T>>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

impl<T> Connection<T> {
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().map(|edge| &edge.node)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

/// Price as display text; null, empty and zero prices count as unset
pub fn price_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        _ => None,
    }
}

// =============================================================================
// Page Types
// =============================================================================

/// Price shown on the product page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPrice {
    pub amount: Option<String>,
    /// Show as "from" price: configurable product with no resolved variant
    pub is_from: bool,
}

/// Everything the product page needs
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub url_key: String,
    pub product: ProductNode,
    pub variant: VariantInfo,
    pub price: DisplayPrice,
    /// Query string to replace the current one with, when single-option
    /// attributes had to be selected
    pub redirect_query: Option<String>,
    /// Product id sent to the cart; `None` disables the add-to-cart button
    pub cart_product_id: Option<String>,
}
