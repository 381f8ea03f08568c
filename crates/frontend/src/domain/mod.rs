pub mod a001_inventory_item;
pub mod a002_screen;
pub mod a003_content_asset;
pub mod a004_playlist;
pub mod a005_schedule;

/// Human-readable property name for a stored property code.
/// Unknown codes render as-is.
pub(crate) fn property_label(code: &str) -> String {
    contracts::enums::Property::from_code(code)
        .map(|p| p.display_name().to_string())
        .unwrap_or_else(|| code.to_string())
}
