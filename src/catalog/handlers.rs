//! Product page handler

use storefront_core::{ProductVariants, VariantInfo, auto_select_params, cache_key};

use super::service::ProductService;
use super::types::{DisplayPrice, ProductNode, ProductPage, price_text};
use crate::error::{StorefrontError, StorefrontResult};

/// Build the product page for `/product/{segments..}?{query}`
///
/// # Errors
///
/// Returns `StorefrontError::NotFound` when the product cannot be loaded.
pub async fn product_page<S: AsRef<str>>(
    products: &ProductService,
    segments: &[S],
    query: &str,
) -> StorefrontResult<ProductPage> {
    let url_key = cache_key(segments);
    let product = products
        .get_single_product(&url_key)
        .await
        .ok_or_else(|| StorefrontError::NotFound(url_key.clone()))?;

    let model = product.variant_model();
    let variant = model.resolve(query);
    let redirect_query = auto_select_params(model.configurable, query, &model.attributes);
    let price = display_price(&product, &model, &variant);
    let cart_product_id = cart_product_id(&product, &variant);

    Ok(ProductPage {
        url_key,
        product,
        variant,
        price,
        redirect_query,
        cart_product_id,
    })
}

/// Price for the current selection
///
/// A resolved, in-stock variant shows its own price (child product first,
/// then the combination record). Everything else shows the product's base
/// price, marked as a "from" price for configurable products with no
/// resolved variant.
pub fn display_price(
    product: &ProductNode,
    model: &ProductVariants,
    variant: &VariantInfo,
) -> DisplayPrice {
    if !product.is_configurable() {
        return DisplayPrice {
            amount: product.base_price(),
            is_from: false,
        };
    }

    let is_from = !variant.is_resolved();
    let variant_price = variant
        .variant_id
        .as_deref()
        .filter(|_| variant.in_stock)
        .and_then(|id| {
            product
                .variant_node(id)
                .and_then(|node| price_text(node.price.as_ref()))
                .or_else(|| model.record(id).and_then(|record| record.price))
        });

    DisplayPrice {
        amount: variant_price.or_else(|| product.base_price()),
        is_from,
    }
}

/// Id sent to the cart
///
/// Configurable products add the resolved variant; simple products add the
/// trailing segment of their own id.
pub fn cart_product_id(product: &ProductNode, variant: &VariantInfo) -> Option<String> {
    if product.is_configurable() {
        return variant.variant_id.clone();
    }

    product
        .id
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
}
