//! Colour swatches for colour options
//!
//! Option labels come from the catalogue in Spanish, so the table is keyed by
//! those labels.

/// Hex code used when a label has no swatch
pub const FALLBACK_HEX: &str = "#9CA3AF";

const COLOR_MAP: &[(&str, &str)] = &[
    ("Rojo", "#DC2626"),
    ("Verde", "#6e6a51"),
    ("Amarillo", "#EAB308"),
    ("Negro", "#000000"),
    ("Blanco", "#FFFFFF"),
    ("Beige", "#D4B896"),
    ("Guindo", "#a74464"),
    ("Azul", "#1E3A8A"),
];

/// Hex code for a colour label, or [`FALLBACK_HEX`]
pub fn color_hex(label: &str) -> &'static str {
    lookup(label).unwrap_or(FALLBACK_HEX)
}

/// Whether the label has its own swatch
pub fn is_known_color(label: &str) -> bool {
    lookup(label).is_some()
}

/// Whether a swatch is light enough to need a ring on a white background
pub fn is_light(hex: &str) -> bool {
    hex.eq_ignore_ascii_case("#FFFFFF")
}

fn lookup(label: &str) -> Option<&'static str> {
    let label = label.trim();
    COLOR_MAP
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, hex)| *hex)
}
