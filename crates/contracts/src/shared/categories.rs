//! Category translation tables.
//!
//! Filter controls use short stable keys (`"furniture"`); records store the
//! display form (`"Furniture"`). One centralized table per catalog kind keeps
//! the mapping in a single place instead of repeating it per view.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// What to do when a filter key has no entry in the translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnmappedKeyPolicy {
    /// Unmapped key matches nothing.
    Strict,
    /// Unmapped key is compared literally against record categories.
    FallbackToLiteral,
}

/// Catalogs that carry a category field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Inventory,
    Content,
}

const INVENTORY_ENTRIES: &[(&str, &str)] = &[
    ("furniture", "Furniture"),
    ("electronics", "Electronics"),
    ("kitchenware", "Kitchenware"),
    ("linens", "Linens"),
    ("decor", "Decor"),
];

const CONTENT_ENTRIES: &[(&str, &str)] = &[
    ("promo", "Promo"),
    ("menu", "Menu"),
    ("events", "Events"),
    ("ambient", "Ambient"),
];

static INVENTORY_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| INVENTORY_ENTRIES.iter().copied().collect());

static CONTENT_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CONTENT_ENTRIES.iter().copied().collect());

static EMPTY_INDEX: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(HashMap::new);

/// Key-to-display lookup with a configurable unmapped-key policy.
#[derive(Clone, Copy)]
pub struct CategoryMap {
    index: &'static HashMap<&'static str, &'static str>,
    pub policy: UnmappedKeyPolicy,
}

impl CategoryMap {
    /// Map for catalogs that have no category field at all.
    pub fn empty() -> Self {
        Self {
            index: &EMPTY_INDEX,
            policy: UnmappedKeyPolicy::FallbackToLiteral,
        }
    }

    pub fn with_policy(self, policy: UnmappedKeyPolicy) -> Self {
        Self { policy, ..self }
    }

    /// Translate a filter key to the display form stored on records.
    ///
    /// `None` means "match nothing" (Strict policy, unmapped key).
    pub fn resolve<'a>(&self, key: &'a str) -> Option<&'a str> {
        match self.index.get(key).copied() {
            Some(display) => Some(display),
            None => match self.policy {
                UnmappedKeyPolicy::Strict => None,
                UnmappedKeyPolicy::FallbackToLiteral => Some(key),
            },
        }
    }
}

/// The translation table for one catalog kind. Default policy is
/// `FallbackToLiteral`, per the filter contract's edge-case rule.
pub fn category_map(kind: CatalogKind) -> CategoryMap {
    let index: &'static HashMap<_, _> = match kind {
        CatalogKind::Inventory => &INVENTORY_INDEX,
        CatalogKind::Content => &CONTENT_INDEX,
    };
    CategoryMap {
        index,
        policy: UnmappedKeyPolicy::FallbackToLiteral,
    }
}

/// `(value, label)` pairs for a category select control, wildcard first.
pub fn category_options(kind: CatalogKind) -> Vec<(String, String)> {
    let entries = match kind {
        CatalogKind::Inventory => INVENTORY_ENTRIES,
        CatalogKind::Content => CONTENT_ENTRIES,
    };
    let mut options = vec![("all".to_string(), "All categories".to_string())];
    options.extend(
        entries
            .iter()
            .map(|(key, display)| (key.to_string(), display.to_string())),
    );
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_key_resolves_to_display_form() {
        let map = category_map(CatalogKind::Inventory);
        assert_eq!(map.resolve("furniture"), Some("Furniture"));
        assert_eq!(map.resolve("decor"), Some("Decor"));
    }

    #[test]
    fn unmapped_key_falls_back_to_literal_by_default() {
        let map = category_map(CatalogKind::Inventory);
        assert_eq!(map.resolve("Plants"), Some("Plants"));
    }

    #[test]
    fn unmapped_key_matches_nothing_under_strict_policy() {
        let map = category_map(CatalogKind::Inventory).with_policy(UnmappedKeyPolicy::Strict);
        assert_eq!(map.resolve("Plants"), None);
        // mapped keys still resolve
        assert_eq!(map.resolve("menu"), None);
        let content = category_map(CatalogKind::Content).with_policy(UnmappedKeyPolicy::Strict);
        assert_eq!(content.resolve("menu"), Some("Menu"));
    }

    #[test]
    fn empty_map_only_falls_back() {
        let map = CategoryMap::empty();
        assert_eq!(map.resolve("anything"), Some("anything"));
    }

    #[test]
    fn options_start_with_wildcard() {
        let options = category_options(CatalogKind::Content);
        assert_eq!(options[0].0, "all");
        assert!(options.iter().any(|(value, _)| value == "promo"));
    }
}
