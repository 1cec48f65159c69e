//! WhatsApp product enquiries

use storefront_core::VariantInfo;
use url::form_urlencoded;

use super::types::ProductNode;

/// Number that receives product enquiries
pub const WHATSAPP_NUMBER: &str = "59168686060";

/// Attribute codes mentioned in an enquiry and the label used for each
const ENQUIRY_ATTRIBUTES: &[(&str, &str)] = &[("color", "Color"), ("size", "Talla")];

/// Enquiry text for a product and its current selection
///
/// Selected colour and size are listed by label; the quantity line only
/// appears for more than one unit.
pub fn enquiry_message(
    product: &ProductNode,
    variant: &VariantInfo,
    quantity: u32,
    product_url: &str,
) -> String {
    let name = match product.name.trim() {
        "" => "Producto",
        name => name,
    };

    let details: String = ENQUIRY_ATTRIBUTES
        .iter()
        .filter_map(|(code, label)| {
            let option = variant
                .variant_attributes
                .iter()
                .find(|attribute| attribute.code == *code)?
                .options
                .iter()
                .find(|option| option.is_selected)?;
            Some(format!("\n{label}: {}", option.label))
        })
        .collect();

    let quantity = if quantity > 1 {
        format!("Cantidad: {quantity}")
    } else {
        String::new()
    };

    format!(
        "Hola! Estoy interesado en consultar sobre este producto:\n\n\
         *{name}*{details}\n{quantity}\n\n\
         Link: {product_url}\n\n\
         Podrian darme mas informacion?"
    )
}

/// `https://wa.me/..` link that opens a chat with the enquiry pre-filled
pub fn enquiry_link(
    product: &ProductNode,
    variant: &VariantInfo,
    quantity: u32,
    product_url: &str,
) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("text", &enquiry_message(product, variant, quantity, product_url))
        .finish();

    format!("https://wa.me/{WHATSAPP_NUMBER}?{query}")
}
