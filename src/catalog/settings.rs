//! Catalogue export settings

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Business details and styling printed on an exported catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSettings {
    pub show_price: bool,
    pub business_name: String,
    pub contact_number: String,
    pub whatsapp_number: String,
    pub email: String,
    pub website: String,
    pub instagram: String,
    pub facebook: String,
    pub logo: String,
    pub brand_color: String,
    pub secondary_color: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            show_price: false,
            business_name: "Confecciones Tarifa".into(),
            contact_number: "68686060".into(),
            whatsapp_number: "68686060".into(),
            email: "confeccionestarifa@gmail.com".into(),
            website: "confecciones-tarifa.shop".into(),
            instagram: "@confecciones_tarifa".into(),
            facebook: "ConfeccionesTarifa".into(),
            logo: "/image/Logo.webp".into(),
            brand_color: "#DC2626".into(),
            secondary_color: "#1F2937".into(),
        }
    }
}

impl CatalogSettings {
    /// Settings from the export page query
    ///
    /// Without a query the defaults apply as-is. With one, prices are shown
    /// unless `showPrice=false`, and every empty or missing field keeps its
    /// default.
    pub fn from_query(params: Option<&str>) -> Self {
        let defaults = Self::default();
        let Some(params) = params else {
            return defaults;
        };

        let params = params.strip_prefix('?').unwrap_or(params);
        let pairs: Vec<(String, String)> = form_urlencoded::parse(params.as_bytes())
            .into_owned()
            .collect();
        let get = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };
        let text = |key: &str, default: String| {
            get(key)
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
                .unwrap_or(default)
        };

        Self {
            show_price: get("showPrice") != Some("false"),
            business_name: text("businessName", defaults.business_name),
            contact_number: text("contactNumber", defaults.contact_number),
            whatsapp_number: text("whatsappNumber", defaults.whatsapp_number),
            email: text("email", defaults.email),
            website: text("website", defaults.website),
            instagram: text("instagram", defaults.instagram),
            facebook: text("facebook", defaults.facebook),
            logo: text("logo", defaults.logo),
            brand_color: text("brandColor", defaults.brand_color),
            secondary_color: text("secondaryColor", defaults.secondary_color),
        }
    }
}
