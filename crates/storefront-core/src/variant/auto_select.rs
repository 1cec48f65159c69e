//! Pre-selection of attributes that offer a single option

use url::form_urlencoded;

use super::types::AttributeDefinition;

/// Add every attribute with exactly one option that the query does not
/// mention yet
///
/// Returns the new query string (without `?`), or `None` when nothing had to
/// be added so callers can skip the redirect. Existing parameters are kept
/// in their original order.
pub fn auto_select_params(
    is_configurable: bool,
    params: &str,
    attributes: &[AttributeDefinition],
) -> Option<String> {
    if !is_configurable || attributes.is_empty() {
        return None;
    }

    let params = params.strip_prefix('?').unwrap_or(params);
    let mut pairs: Vec<(String, String)> = form_urlencoded::parse(params.as_bytes())
        .into_owned()
        .collect();

    let mut changed = false;
    for attribute in attributes {
        if pairs.iter().any(|(key, _)| *key == attribute.code) {
            continue;
        }
        if let [only] = attribute.options.as_slice() {
            pairs.push((attribute.code.clone(), only.id.to_string()));
            changed = true;
        }
    }

    if !changed {
        return None;
    }

    tracing::debug!("auto-selected single-option attributes");
    Some(
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&pairs)
            .finish(),
    )
}
