//! Decoding of backend attribute payloads
//!
//! Product payloads carry their attributes either as a JSON string
//! (`superAttributeOptions`) or as a GraphQL connection
//! (`superAttributes.edges[].node`), and option lists come as plain arrays or
//! as connections too. Everything here degrades to empty results instead of
//! failing: a product page must render even when the payload is dirty.

use serde_json::{Map, Value};
use std::collections::HashSet;

use super::types::{AttributeDefinition, OptionId, OptionValue, scalar_string};

/// Errors raised by the strict decoders
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// A string field did not contain valid JSON
    #[error("Malformed JSON payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The JSON was valid but not in any accepted shape
    #[error("Unexpected payload shape: expected {0}")]
    UnexpectedShape(&'static str),
}

/// Decode a value that may be JSON encoded inside a string
///
/// Non-string values are returned as they are. Blank strings decode to
/// `Null`.
pub fn try_decode(value: &Value) -> Result<Value, PayloadError> {
    match value {
        Value::String(raw) if raw.trim().is_empty() => Ok(Value::Null),
        Value::String(raw) => Ok(serde_json::from_str(raw)?),
        other => Ok(other.clone()),
    }
}

/// Flatten an array or a GraphQL `edges[].node` connection into its items
pub(crate) fn list_items(value: &Value) -> Option<Vec<&Value>> {
    match value {
        Value::Array(items) => Some(items.iter().collect()),
        Value::Object(obj) => {
            let edges = obj.get("edges")?.as_array()?;
            Some(edges.iter().filter_map(|edge| edge.get("node")).collect())
        }
        _ => None,
    }
}

/// Decode attribute definitions, failing on malformed input
///
/// Accepts an array of attributes, a connection of attributes, or either
/// of those encoded in a string. `Null` decodes to no attributes.
/// Attributes without a code and options without an id are skipped, as are
/// repeated attribute codes and repeated option ids.
pub fn try_parse_attribute_definitions(
    payload: &Value,
) -> Result<Vec<AttributeDefinition>, PayloadError> {
    let decoded = try_decode(payload)?;
    if decoded.is_null() {
        return Ok(Vec::new());
    }

    let items = list_items(&decoded).ok_or(PayloadError::UnexpectedShape(
        "an array or connection of attributes",
    ))?;

    let mut seen = HashSet::new();
    let attributes = items
        .into_iter()
        .filter_map(|item| item.as_object().and_then(attribute_from_object))
        .filter(|attribute| seen.insert(attribute.code.clone()))
        .collect();

    Ok(attributes)
}

/// Decode attribute definitions, degrading to an empty list
pub fn parse_attribute_definitions(payload: &Value) -> Vec<AttributeDefinition> {
    try_parse_attribute_definitions(payload).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring malformed attribute payload");
        Vec::new()
    })
}

fn attribute_from_object(obj: &Map<String, Value>) -> Option<AttributeDefinition> {
    let code = obj.get("code").and_then(scalar_string)?;

    let mut seen = HashSet::new();
    let options = obj
        .get("options")
        .and_then(list_items)
        .unwrap_or_default()
        .into_iter()
        .filter_map(option_from_value)
        .filter(|option| seen.insert(option.id.clone()))
        .collect();

    Some(AttributeDefinition {
        id: obj.get("id").and_then(scalar_string),
        label: obj.get("label").and_then(scalar_string),
        code,
        options,
    })
}

fn option_from_value(value: &Value) -> Option<OptionValue> {
    let obj = value.as_object()?;
    let id = obj.get("id").and_then(OptionId::from_value)?;
    let admin_name = obj.get("adminName").and_then(scalar_string);
    let label = obj
        .get("label")
        .and_then(scalar_string)
        .or_else(|| admin_name.clone())
        .unwrap_or_else(|| id.to_string());

    Some(OptionValue {
        id,
        label,
        admin_name,
    })
}
