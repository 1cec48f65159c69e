//! Product links that pre-select a variant

use url::form_urlencoded;

use super::combinations::Combinations;
use super::types::CombinationRecord;

/// Build `/product/{url_key}?color=..&size=..` selecting one variant
///
/// The variant is looked up by its key (either the full id or the last
/// path segment of an IRI such as `/api/products/42`) and then by SKU. When
/// no record matches, the bare product path is returned.
pub fn variant_link(
    url_key: &str,
    combinations: &Combinations,
    variant_id: &str,
    variant_sku: &str,
) -> String {
    let base = format!("/product/{}", url_key.trim_matches('/'));
    let records = combinations.normalize();

    let Some(record) = find_variant(&records, variant_id, variant_sku) else {
        tracing::warn!(sku = %variant_sku, "no combination found for variant");
        return base;
    };

    // Keyed records can carry unreserved non-attribute fields; only numeric
    // option ids go into the link.
    let pairs: Vec<(&str, &str)> = record
        .attribute_values
        .iter()
        .filter(|(_, id)| id.as_str().bytes().all(|b| b.is_ascii_digit()))
        .map(|(code, id)| (code.as_str(), id.as_str()))
        .collect();

    if pairs.is_empty() {
        return base;
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();

    format!("{base}?{query}")
}

fn find_variant<'a>(
    records: &'a [CombinationRecord],
    variant_id: &str,
    variant_sku: &str,
) -> Option<&'a CombinationRecord> {
    let short_id = variant_id.rsplit('/').next().unwrap_or(variant_id);

    records
        .iter()
        .find(|r| !variant_id.is_empty() && (r.variant_key == variant_id || r.variant_key == short_id))
        .or_else(|| {
            records
                .iter()
                .find(|r| !variant_sku.is_empty() && r.sku.as_deref() == Some(variant_sku))
        })
}
