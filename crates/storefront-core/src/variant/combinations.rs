//! Upstream combinations payloads and their normalization
//!
//! The backend has shipped two shapes for the same table:
//!
//! ```text
//! keyed:  {"v1": {"color": 1, "size": 10, "isValid": true, "sku": "A"}, ...}
//! list:   [{"code": "color", "options": [{"id": 1, "products": ["v1", "v2"]}]}, ...]
//! ```
//!
//! Both are decoded into [`Combinations`] at the boundary and flattened into
//! [`CombinationRecord`]s by [`Combinations::normalize`]. Matching code only
//! ever sees records.

use serde_json::{Map, Value};
use std::collections::HashMap;

use super::payload::{PayloadError, list_items, try_decode};
use super::types::{CombinationRecord, OptionId, scalar_string};

/// Fields of a keyed combination that are not attribute values
const RESERVED_FIELDS: &[&str] = &[
    "id",
    "sku",
    "name",
    "price",
    "isValid",
    "is_valid",
    "isSaleable",
    "is_saleable",
];

/// One attribute of the list shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedAttribute {
    /// Attribute code
    pub code: String,
    /// Options with their variants
    pub options: Vec<IndexedOption>,
}

/// One option of the list shape with the variants that carry it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedOption {
    /// Option id
    pub id: OptionId,
    /// Keys of the variants carrying this option
    pub products: Vec<String>,
}

/// Combinations table in one of its upstream shapes
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Combinations {
    /// Variant key to a record of attribute values, `sku` and `isValid`
    ByKeyMap(Map<String, Value>),
    /// Attributes whose options list the variants carrying them
    AttributeList(Vec<IndexedAttribute>),
    /// No usable combinations
    #[default]
    Empty,
}

impl Combinations {
    /// Decode a combinations payload, failing on malformed input
    ///
    /// Strings are parsed as JSON first. `Null`, empty objects and empty
    /// arrays decode to [`Combinations::Empty`].
    pub fn try_from_payload(payload: &Value) -> Result<Self, PayloadError> {
        match try_decode(payload)? {
            Value::Null => Ok(Self::Empty),
            Value::Object(map) if map.is_empty() => Ok(Self::Empty),
            Value::Object(map) if map.contains_key("edges") => {
                let decoded = Value::Object(map);
                Ok(Self::from_attribute_items(list_items(&decoded).unwrap_or_default()))
            }
            Value::Object(map) => Ok(Self::ByKeyMap(map)),
            Value::Array(items) if items.is_empty() => Ok(Self::Empty),
            Value::Array(items) => Ok(Self::from_attribute_items(items.iter().collect())),
            _ => Err(PayloadError::UnexpectedShape(
                "an object keyed by variant or a list of attributes",
            )),
        }
    }

    /// Decode a combinations payload, degrading to [`Combinations::Empty`]
    pub fn from_payload(payload: &Value) -> Self {
        Self::try_from_payload(payload).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring malformed combinations payload");
            Self::Empty
        })
    }

    fn from_attribute_items(items: Vec<&Value>) -> Self {
        let attributes: Vec<IndexedAttribute> = items
            .into_iter()
            .filter_map(indexed_attribute)
            .collect();

        if attributes.is_empty() {
            Self::Empty
        } else {
            Self::AttributeList(attributes)
        }
    }

    /// Whether there are no usable combinations
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Flatten into one record per variant, in payload order
    pub fn normalize(&self) -> Vec<CombinationRecord> {
        match self {
            Self::ByKeyMap(map) => map
                .iter()
                .filter_map(|(key, fields)| keyed_record(key, fields.as_object()?))
                .collect(),
            Self::AttributeList(attributes) => list_records(attributes),
            Self::Empty => Vec::new(),
        }
    }
}

fn keyed_record(key: &str, fields: &Map<String, Value>) -> Option<CombinationRecord> {
    if key.trim().is_empty() {
        return None;
    }

    let attribute_values = fields
        .iter()
        .filter(|(field, _)| !RESERVED_FIELDS.contains(&field.as_str()))
        .filter_map(|(field, value)| Some((field.clone(), attribute_value(value)?)))
        .collect();

    let is_valid = fields
        .get("isValid")
        .or_else(|| fields.get("is_valid"))
        .map_or(true, flag);

    Some(CombinationRecord {
        variant_key: key.to_owned(),
        attribute_values,
        sku: fields.get("sku").and_then(scalar_string),
        is_valid,
        price: fields.get("price").and_then(scalar_string),
    })
}

/// Attribute values are option ids: numbers or non-empty strings
///
/// Unreserved fields that are not attribute codes are kept too; matching
/// only ever looks up attribute codes.
fn attribute_value(value: &Value) -> Option<OptionId> {
    OptionId::from_value(value)
}

/// Read a validity flag sent as a bool, a number or a string
fn flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => matches!(s.trim(), "1" | "true"),
        _ => false,
    }
}

fn indexed_attribute(value: &Value) -> Option<IndexedAttribute> {
    let obj = value.as_object()?;
    let code = obj.get("code").and_then(scalar_string)?;
    let options = obj
        .get("options")
        .and_then(list_items)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|option| {
            let id = option.get("id").and_then(OptionId::from_value)?;
            let products = option
                .get("products")
                .and_then(Value::as_array)
                .map(|products| products.iter().filter_map(scalar_string).collect())
                .unwrap_or_default();
            Some(IndexedOption { id, products })
        })
        .collect();

    Some(IndexedAttribute { code, options })
}

fn list_records(attributes: &[IndexedAttribute]) -> Vec<CombinationRecord> {
    let mut records: Vec<CombinationRecord> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for attribute in attributes {
        for option in &attribute.options {
            for product in &option.products {
                let position = *index.entry(product.as_str()).or_insert_with(|| {
                    records.push(CombinationRecord {
                        variant_key: product.clone(),
                        attribute_values: Vec::new(),
                        sku: None,
                        is_valid: true,
                        price: None,
                    });
                    records.len() - 1
                });

                let record = &mut records[position];
                if record.value(&attribute.code).is_none() {
                    record
                        .attribute_values
                        .push((attribute.code.clone(), option.id.clone()));
                }
            }
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keyed() -> Value {
        json!({
            "v1": {"color": 1, "size": 10, "isValid": true, "sku": "A", "price": "120.00"},
            "v2": {"color": 1, "size": 11, "isValid": false, "sku": "B"}
        })
    }

    #[test]
    fn test_keyed_shape() {
        let combinations = Combinations::from_payload(&keyed());
        assert!(matches!(combinations, Combinations::ByKeyMap(_)));

        let records = combinations.normalize();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].variant_key, "v1");
        assert_eq!(records[0].value("color"), Some(&OptionId::from(1)));
        assert_eq!(records[0].value("size"), Some(&OptionId::from(10)));
        assert_eq!(records[0].sku.as_deref(), Some("A"));
        assert_eq!(records[0].price.as_deref(), Some("120.00"));
        assert!(records[0].is_valid);
        assert!(!records[1].is_valid);
        assert_eq!(records[1].value("sku"), None);
    }

    #[test]
    fn test_keyed_shape_keeps_payload_order() {
        let payload = json!({"z": {"color": 1}, "a": {"color": 2}});
        let keys: Vec<_> = Combinations::from_payload(&payload)
            .normalize()
            .into_iter()
            .map(|r| r.variant_key)
            .collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_keyed_shape_flags() {
        let payload = json!({
            "a": {"color": 1},
            "b": {"color": 1, "isValid": "0"},
            "c": {"color": 1, "is_valid": 1},
            "d": {"color": "12", "label": "Rojo"}
        });
        let records = Combinations::from_payload(&payload).normalize();

        assert!(records[0].is_valid);
        assert!(!records[1].is_valid);
        assert!(records[2].is_valid);
        assert_eq!(
            records[3].attribute_values,
            vec![
                ("color".to_string(), OptionId::from(12)),
                ("label".to_string(), OptionId::from("Rojo")),
            ]
        );
    }

    #[test]
    fn test_keyed_shape_string_ids() {
        let payload = json!({"v1": {"fit": "slim", "size": 10, "isValid": true, "ok": false}});
        let records = Combinations::from_payload(&payload).normalize();

        assert_eq!(records[0].value("fit"), Some(&OptionId::from("slim")));
        assert_eq!(records[0].value("size"), Some(&OptionId::from(10)));
        assert_eq!(records[0].value("ok"), None);
    }

    #[test]
    fn test_list_shape() {
        let payload = json!([
            {"code": "color", "options": [{"id": 1, "label": "Rojo", "products": ["v1", "v2"]}]},
            {"code": "size", "options": [
                {"id": 10, "products": ["v1"]},
                {"id": 11, "products": [2]}
            ]}
        ]);

        let combinations = Combinations::from_payload(&payload);
        assert!(matches!(combinations, Combinations::AttributeList(_)));

        let records = combinations.normalize();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].variant_key, "v1");
        assert_eq!(
            records[0].attribute_values,
            vec![
                ("color".to_string(), OptionId::from(1)),
                ("size".to_string(), OptionId::from(10)),
            ]
        );
        assert_eq!(records[1].variant_key, "v2");
        assert_eq!(records[1].value("size"), None);
        assert_eq!(records[2].variant_key, "2");
        assert!(records.iter().all(|r| r.is_valid));
    }

    #[test]
    fn test_string_payload() {
        let encoded = Value::String(keyed().to_string());
        assert_eq!(
            Combinations::from_payload(&encoded),
            Combinations::from_payload(&keyed())
        );
    }

    #[test]
    fn test_empty_payloads() {
        assert!(Combinations::from_payload(&Value::Null).is_empty());
        assert!(Combinations::from_payload(&json!({})).is_empty());
        assert!(Combinations::from_payload(&json!([])).is_empty());
        assert!(Combinations::from_payload(&json!("")).is_empty());
        assert!(Combinations::from_payload(&json!([{"no": "code"}])).is_empty());
    }

    #[test]
    fn test_malformed_payloads_degrade() {
        assert!(matches!(
            Combinations::try_from_payload(&json!("{broken")),
            Err(PayloadError::Malformed(_))
        ));
        assert!(Combinations::from_payload(&json!("{broken")).is_empty());
        assert!(Combinations::from_payload(&json!(true)).is_empty());

        let payload = json!({"v1": "not an object", "v2": {"color": 1}});
        let records = Combinations::from_payload(&payload).normalize();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].variant_key, "v2");
    }
}
