//! Deterministic display colors for variants.
//!
//! Maps a variant id to a color from a curated palette. The palette is
//! designed to read well as pill backgrounds on both light and dark
//! backgrounds.

use crate::ids::VariantId;

/// Curated palette of 16 variant colors (6-char hex without `#`).
const PALETTE: &[&str] = &[
    "d73a4a", // red
    "e36209", // orange
    "f9c513", // yellow
    "0e8a16", // green
    "006b75", // teal
    "1d76db", // blue
    "5319e7", // purple
    "b60205", // dark red
    "d876e3", // pink
    "0075ca", // ocean
    "7057ff", // violet
    "008672", // sea green
    "e4e669", // lime
    "bfd4f2", // light blue
    "c5def5", // periwinkle
    "fbca04", // gold
];

/// Return the display color for a variant id.
///
/// Ids map to the palette cyclically, so the color is stable for the life
/// of the variant.
pub fn variant_color(id: VariantId) -> &'static str {
    PALETTE[(id.get() as usize - 1) % PALETTE.len()]
}
