//! Attribute, option and combination types

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier of an attribute option or a variant
///
/// The backend sends ids as JSON numbers or strings while query parameters
/// are always strings, so ids are kept in their string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct OptionId(String);

impl OptionId {
    /// Create an id from its string form
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Read an id from a JSON number or non-empty string
    pub fn from_value(value: &Value) -> Option<Self> {
        scalar_string(value).map(Self)
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OptionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for OptionId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<i32> for OptionId {
    fn from(id: i32) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for OptionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value)
            .ok_or_else(|| serde::de::Error::custom("expected a number or a non-empty string"))
    }
}

/// One selectable value of an attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionValue {
    /// Value used in the query string and in combinations
    pub id: OptionId,
    /// Storefront label, e.g. `Rojo`
    pub label: String,
    /// Back-office name, used as the label when none is sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_name: Option<String>,
}

impl OptionValue {
    /// Option with a label and no back-office name
    pub fn new(id: impl Into<OptionId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            admin_name: None,
        }
    }
}

/// One selectable axis of a configurable product, e.g. `color`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDefinition {
    /// Backend id (often an IRI)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Query parameter name and combination field, e.g. `size`
    pub code: String,
    /// Display name, e.g. `Talla`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Options in display order
    pub options: Vec<OptionValue>,
}

impl AttributeDefinition {
    /// Attribute without id or label
    pub fn new(code: impl Into<String>, options: Vec<OptionValue>) -> Self {
        Self {
            id: None,
            code: code.into(),
            label: None,
            options,
        }
    }

    /// Find an option by id
    pub fn option(&self, id: &OptionId) -> Option<&OptionValue> {
        self.options.iter().find(|option| &option.id == id)
    }

    /// Label shown for the axis, falling back to its code
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.code)
    }
}

/// A concrete variant and the attribute values that select it
///
/// Every upstream combinations shape is normalized into this record before
/// any matching happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinationRecord {
    /// Variant id (or the key the backend used for it)
    pub variant_key: String,
    /// `(attribute code, option id)` pairs in payload order
    pub attribute_values: Vec<(String, OptionId)>,
    /// Variant SKU when the payload carries one
    pub sku: Option<String>,
    /// Whether the variant can be sold
    pub is_valid: bool,
    /// Variant price as sent by the backend
    pub price: Option<String>,
}

impl CombinationRecord {
    /// The option this variant has for `code`
    pub fn value(&self, code: &str) -> Option<&OptionId> {
        self.attribute_values
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, id)| id)
    }
}

/// String form of a JSON number or non-empty string
pub(crate) fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_owned())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_option_id_from_number_and_string() {
        assert_eq!(OptionId::from_value(&json!(10)), Some(OptionId::new("10")));
        assert_eq!(OptionId::from_value(&json!("10")), Some(OptionId::new("10")));
        assert_eq!(OptionId::from_value(&json!(" 7 ")), Some(OptionId::new("7")));
        assert_eq!(OptionId::from_value(&json!("")), None);
        assert_eq!(OptionId::from_value(&json!(null)), None);
        assert_eq!(OptionId::from_value(&json!([1])), None);
    }

    #[test]
    fn test_option_id_deserialize() {
        let ids: Vec<OptionId> = serde_json::from_value(json!([1, "2"])).unwrap();
        assert_eq!(ids, vec![OptionId::from(1), OptionId::from("2")]);
        assert!(serde_json::from_value::<OptionId>(json!(true)).is_err());
    }

    #[test]
    fn test_option_id_serializes_as_string() {
        assert_eq!(serde_json::to_value(OptionId::from(3)).unwrap(), json!("3"));
    }

    #[test]
    fn test_attribute_lookup() {
        let attribute = AttributeDefinition::new(
            "color",
            vec![OptionValue::new(1, "Rojo"), OptionValue::new(2, "Azul")],
        );

        assert_eq!(attribute.option(&OptionId::from(2)).map(|o| o.label.as_str()), Some("Azul"));
        assert!(attribute.option(&OptionId::from(3)).is_none());
        assert_eq!(attribute.display_label(), "color");
    }
}
