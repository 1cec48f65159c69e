//! Attribute selection parsed from URL query parameters

use serde::Serialize;
use url::form_urlencoded;

use super::types::{AttributeDefinition, OptionId};

/// The options currently chosen, at most one per attribute code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    choices: Vec<(String, OptionId)>,
}

impl Selection {
    /// Parse `color=1&size=10` (a leading `?` is allowed) against `attributes`
    ///
    /// Keys that are not attribute codes are ignored. A value counts only if
    /// it is one of the attribute's option ids; empty, undecodable or unknown
    /// values leave that attribute unselected. The first usable value of a
    /// repeated key wins.
    pub fn parse(params: &str, attributes: &[AttributeDefinition]) -> Self {
        let params = params.strip_prefix('?').unwrap_or(params);
        let mut choices: Vec<(String, OptionId)> = Vec::new();

        for (key, value) in form_urlencoded::parse(params.as_bytes()) {
            let Some(attribute) = attributes.iter().find(|a| a.code == key) else {
                continue;
            };
            if choices.iter().any(|(code, _)| *code == attribute.code) {
                continue;
            }

            let id = OptionId::new(value.trim());
            if attribute.option(&id).is_some() {
                choices.push((attribute.code.clone(), id));
            } else {
                tracing::trace!(code = %attribute.code, "ignoring unknown option in query");
            }
        }

        // Report choices in attribute order, not query order.
        choices.sort_by_key(|(code, _)| attributes.iter().position(|a| &a.code == code));
        Self { choices }
    }

    /// The option chosen for `code`
    pub fn get(&self, code: &str) -> Option<&OptionId> {
        self.choices
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, id)| id)
    }

    /// Iterate `(code, option)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionId)> {
        self.choices.iter().map(|(code, id)| (code.as_str(), id))
    }

    /// Number of selected attributes
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Whether every attribute has a chosen option
    pub fn is_complete(&self, attributes: &[AttributeDefinition]) -> bool {
        !attributes.is_empty() && attributes.iter().all(|a| self.get(&a.code).is_some())
    }
}
