//! Variant resolution for configurable products

use serde::Serialize;
use std::collections::BTreeMap;

use super::combinations::Combinations;
use super::selection::Selection;
use super::types::{AttributeDefinition, CombinationRecord, OptionId};

/// An option annotated for the current selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOption {
    /// Option id
    pub id: OptionId,
    /// Option label
    pub label: String,
    /// At least one variant has this option and agrees with every other
    /// selected attribute
    pub is_valid: bool,
    /// Chosen in the current query
    pub is_selected: bool,
}

/// An attribute with per-option availability
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAttribute {
    /// Attribute code
    pub code: String,
    /// Attribute label, or the code when it has none
    pub label: String,
    /// Option chosen in the query, if it is one of the attribute's options
    pub selected: Option<OptionId>,
    /// Options in display order
    pub options: Vec<ResolvedOption>,
}

/// Outcome of resolving a selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantInfo {
    /// Variant matching the selection on every attribute, if any
    pub variant_id: Option<String>,
    /// Whether that variant is saleable; `false` while nothing is resolved
    pub in_stock: bool,
    /// SKU of the resolved variant
    pub sku: Option<String>,
    /// Every attribute with per-option availability
    pub variant_attributes: Vec<ResolvedAttribute>,
    /// Valid option ids per attribute code
    pub possible_options: BTreeMap<String, Vec<OptionId>>,
}

impl VariantInfo {
    /// Attribute codes left with exactly one valid option
    pub fn auto_resolvable(&self) -> Vec<&str> {
        self.possible_options
            .iter()
            .filter(|(_, ids)| ids.len() == 1)
            .map(|(code, _)| code.as_str())
            .collect()
    }

    /// Whether the selection resolved to a concrete variant
    pub fn is_resolved(&self) -> bool {
        self.variant_id.is_some()
    }

    /// `(attribute label, option label)` of every selected option
    pub fn selected_labels(&self) -> Vec<(&str, &str)> {
        self.variant_attributes
            .iter()
            .filter_map(|attribute| {
                let option = attribute.options.iter().find(|o| o.is_selected)?;
                Some((attribute.label.as_str(), option.label.as_str()))
            })
            .collect()
    }
}

/// Resolve `selection_params` against a product's attributes and combinations
///
/// Non-configurable products have nothing to resolve and return an empty
/// [`VariantInfo`]. Partial selections, selections with no matching variant,
/// and malformed input never fail: they yield `variant_id == None` and
/// `in_stock == false`. When several variants share the same attribute
/// values, the first in payload order wins.
pub fn resolve(
    is_configurable: bool,
    selection_params: &str,
    attributes: &[AttributeDefinition],
    combinations: &Combinations,
) -> VariantInfo {
    if !is_configurable {
        return VariantInfo::default();
    }

    let records = combinations.normalize();
    let selection = Selection::parse(selection_params, attributes);
    resolve_records(&selection, attributes, &records)
}

/// Resolve an already parsed selection against normalized records
pub fn resolve_records(
    selection: &Selection,
    attributes: &[AttributeDefinition],
    records: &[CombinationRecord],
) -> VariantInfo {
    let mut possible_options = BTreeMap::new();
    let mut variant_attributes = Vec::with_capacity(attributes.len());

    for attribute in attributes {
        let selected = selection.get(&attribute.code);
        let options: Vec<ResolvedOption> = attribute
            .options
            .iter()
            .map(|option| ResolvedOption {
                id: option.id.clone(),
                label: option.label.clone(),
                is_valid: is_option_valid(&attribute.code, &option.id, selection, records),
                is_selected: selected == Some(&option.id),
            })
            .collect();

        possible_options.insert(
            attribute.code.clone(),
            options
                .iter()
                .filter(|o| o.is_valid)
                .map(|o| o.id.clone())
                .collect(),
        );
        variant_attributes.push(ResolvedAttribute {
            code: attribute.code.clone(),
            label: attribute.display_label().to_owned(),
            selected: selected.cloned(),
            options,
        });
    }

    let matched = if selection.is_complete(attributes) {
        records.iter().find(|record| {
            attributes
                .iter()
                .all(|a| record.value(&a.code) == selection.get(&a.code))
        })
    } else {
        None
    };

    match matched {
        Some(record) => tracing::trace!(variant = %record.variant_key, "selection resolved"),
        None => tracing::trace!(selected = selection.len(), "selection not resolved"),
    }

    VariantInfo {
        variant_id: matched.map(|r| r.variant_key.clone()),
        in_stock: matched.is_some_and(|r| r.is_valid),
        sku: matched.and_then(|r| r.sku.clone()),
        variant_attributes,
        possible_options,
    }
}

/// An option is valid when some variant carries it and agrees with every
/// other selected attribute.
fn is_option_valid(
    code: &str,
    option: &OptionId,
    selection: &Selection,
    records: &[CombinationRecord],
) -> bool {
    records.iter().any(|record| {
        record.value(code) == Some(option)
            && selection
                .iter()
                .filter(|(other, _)| *other != code)
                .all(|(other, chosen)| record.value(other) == Some(chosen))
    })
}

/// Everything needed to resolve variants for one product
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductVariants {
    /// Whether the product has variants to resolve
    pub configurable: bool,
    /// The product's own saleable flag, used when it is not configurable
    pub saleable: bool,
    /// Selectable attributes
    pub attributes: Vec<AttributeDefinition>,
    /// Variants and their attribute values
    pub combinations: Combinations,
}

impl ProductVariants {
    /// Resolve `selection_params`
    ///
    /// For non-configurable products `in_stock` is the product's saleable
    /// flag.
    pub fn resolve(&self, selection_params: &str) -> VariantInfo {
        if !self.configurable {
            return VariantInfo {
                in_stock: self.saleable,
                ..VariantInfo::default()
            };
        }
        resolve(true, selection_params, &self.attributes, &self.combinations)
    }

    /// The normalized record of a variant
    pub fn record(&self, variant_key: &str) -> Option<CombinationRecord> {
        self.combinations
            .normalize()
            .into_iter()
            .find(|record| record.variant_key == variant_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{OptionValue, parse_attribute_definitions};
    use serde_json::json;

    fn attributes() -> Vec<AttributeDefinition> {
        vec![
            AttributeDefinition::new(
                "color",
                vec![OptionValue::new(1, "Rojo"), OptionValue::new(2, "Azul")],
            ),
            AttributeDefinition::new(
                "size",
                vec![OptionValue::new(10, "M"), OptionValue::new(11, "L")],
            ),
        ]
    }

    fn combinations() -> Combinations {
        Combinations::from_payload(&json!({
            "v1": {"color": 1, "size": 10, "isValid": true, "sku": "A"},
            "v2": {"color": 1, "size": 11, "isValid": false, "sku": "B"}
        }))
    }

    fn valid_ids(info: &VariantInfo, code: &str) -> Vec<String> {
        info.possible_options[code]
            .iter()
            .map(|id| id.to_string())
            .collect()
    }

    #[test]
    fn test_full_selection_in_stock() {
        let info = resolve(true, "color=1&size=10", &attributes(), &combinations());
        assert_eq!(info.variant_id.as_deref(), Some("v1"));
        assert!(info.in_stock);
        assert_eq!(info.sku.as_deref(), Some("A"));
    }

    #[test]
    fn test_full_selection_out_of_stock() {
        let info = resolve(true, "color=1&size=11", &attributes(), &combinations());
        assert_eq!(info.variant_id.as_deref(), Some("v2"));
        assert!(!info.in_stock);
    }

    #[test]
    fn test_partial_selection() {
        let info = resolve(true, "color=1", &attributes(), &combinations());
        assert_eq!(info.variant_id, None);
        assert!(!info.in_stock);
        assert_eq!(valid_ids(&info, "size"), vec!["10", "11"]);
        assert_eq!(valid_ids(&info, "color"), vec!["1"]);

        let color = &info.variant_attributes[0];
        assert_eq!(color.selected, Some(OptionId::from(1)));
        assert!(color.options[0].is_selected);
        assert!(!color.options[1].is_valid);
    }

    #[test]
    fn test_validity_depends_on_other_axes() {
        let combinations = Combinations::from_payload(&json!({
            "v1": {"color": 1, "size": 10},
            "v2": {"color": 2, "size": 11}
        }));

        let info = resolve(true, "size=11", &attributes(), &combinations);
        assert_eq!(valid_ids(&info, "color"), vec!["2"]);
        // The axis's own selection does not restrict its options.
        assert_eq!(valid_ids(&info, "size"), vec!["10", "11"]);
    }

    #[test]
    fn test_no_selection() {
        let info = resolve(true, "", &attributes(), &combinations());
        assert_eq!(info.variant_id, None);
        assert_eq!(valid_ids(&info, "color"), vec!["1"]);
        assert_eq!(valid_ids(&info, "size"), vec!["10", "11"]);
        assert_eq!(info.auto_resolvable(), vec!["color"]);
    }

    #[test]
    fn test_full_selection_without_match() {
        let info = resolve(true, "color=2&size=10", &attributes(), &combinations());
        assert_eq!(info.variant_id, None);
        assert!(!info.in_stock);
    }

    #[test]
    fn test_not_configurable() {
        let info = resolve(false, "color=1&size=10", &attributes(), &combinations());
        assert_eq!(info, VariantInfo::default());
    }

    #[test]
    fn test_duplicate_tuples_first_wins() {
        let combinations = Combinations::from_payload(&json!({
            "first": {"color": 1, "size": 10, "isValid": false},
            "second": {"color": 1, "size": 10, "isValid": true}
        }));
        let info = resolve(true, "color=1&size=10", &attributes(), &combinations);
        assert_eq!(info.variant_id.as_deref(), Some("first"));
        assert!(!info.in_stock);
    }

    #[test]
    fn test_list_shape_matches_keyed_shape() {
        let list = Combinations::from_payload(&json!([
            {"code": "color", "options": [{"id": 1, "products": ["v1", "v2"]}]},
            {"code": "size", "options": [
                {"id": 10, "products": ["v1"]},
                {"id": 11, "products": ["v2"]}
            ]}
        ]));

        let info = resolve(true, "color=1&size=11", &attributes(), &list);
        assert_eq!(info.variant_id.as_deref(), Some("v2"));
        assert!(info.in_stock);
        assert_eq!(
            info.possible_options,
            resolve(true, "color=1&size=11", &attributes(), &combinations()).possible_options
        );
    }

    #[test]
    fn test_garbage_input_degrades() {
        let attributes = parse_attribute_definitions(&json!("not json"));
        let combinations = Combinations::from_payload(&json!({"v1": 5}));
        let info = resolve(true, "%%%&color", &attributes, &combinations);
        assert_eq!(info, VariantInfo::default());
    }

    #[test]
    fn test_string_option_ids_resolve() {
        let attributes = vec![AttributeDefinition::new(
            "fit",
            vec![OptionValue::new("slim", "Slim"), OptionValue::new("wide", "Wide")],
        )];
        let combinations = Combinations::from_payload(&json!({
            "v1": {"fit": "slim", "isValid": true}
        }));

        let info = resolve(true, "fit=slim", &attributes, &combinations);
        assert_eq!(info.variant_id.as_deref(), Some("v1"));
        assert!(info.in_stock);
        assert_eq!(valid_ids(&info, "fit"), vec!["slim"]);
    }

    #[test]
    fn test_selected_labels() {
        let info = resolve(true, "color=1&size=11", &attributes(), &combinations());
        assert_eq!(info.selected_labels(), vec![("color", "Rojo"), ("size", "L")]);
    }

    #[test]
    fn test_product_variants_simple_product_uses_saleable_flag() {
        let product = ProductVariants {
            configurable: false,
            saleable: true,
            ..ProductVariants::default()
        };
        let info = product.resolve("color=1");
        assert!(info.in_stock);
        assert_eq!(info.variant_id, None);
        assert!(info.variant_attributes.is_empty());
    }

    #[test]
    fn test_product_variants_configurable() {
        let product = ProductVariants {
            configurable: true,
            saleable: true,
            attributes: attributes(),
            combinations: combinations(),
        };
        let info = product.resolve("color=1&size=11");
        assert_eq!(info.variant_id.as_deref(), Some("v2"));
        assert!(!info.in_stock);
        assert_eq!(product.record("v1").and_then(|r| r.sku).as_deref(), Some("A"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let info = resolve(true, "color=1&size=10", &attributes(), &combinations());
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["variantId"], json!("v1"));
        assert_eq!(value["inStock"], json!(true));
        assert_eq!(value["possibleOptions"]["size"], json!(["10", "11"]));
        assert_eq!(value["variantAttributes"][0]["options"][0]["isValid"], json!(true));
    }
}
