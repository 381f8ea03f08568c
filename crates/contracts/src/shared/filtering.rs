//! Catalog filtering.
//!
//! Every list view reduces its catalog through the same pure function:
//! a free-text query plus categorical filters, applied as one conjunctive
//! predicate per record. The result is a subsequence of the input in the
//! original relative order; the catalog itself is never touched.

use crate::shared::categories::CategoryMap;
use serde::{Deserialize, Serialize};

/// Sentinel value matching anything, on either side of a comparison.
pub const WILDCARD: &str = "all";

/// Active filter-control values for one list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSettings {
    /// Case-insensitive substring query; empty matches everything.
    pub query: String,
    pub property: String,
    pub category: String,
    pub status: String,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            query: String::new(),
            property: WILDCARD.to_string(),
            category: WILDCARD.to_string(),
            status: WILDCARD.to_string(),
        }
    }
}

impl FilterSettings {
    /// Number of non-default controls, shown on the filter-panel badge.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.query.trim().is_empty() {
            count += 1;
        }
        for value in [&self.property, &self.category, &self.status] {
            if value != WILDCARD {
                count += 1;
            }
        }
        count
    }

    pub fn is_identity(&self) -> bool {
        self.active_count() == 0
    }
}

/// A record that can pass through [`apply_filter`].
///
/// Catalogs without a category or status field keep the defaults: such
/// records match only the wildcard value of that control.
pub trait Filterable {
    /// Text fields the query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Property code; `"all"` marks a record visible at every property.
    fn property(&self) -> &str;

    fn category(&self) -> Option<&str> {
        None
    }

    fn status(&self) -> Option<&str> {
        None
    }
}

/// Whether one record passes the current settings.
pub fn matches<T: Filterable>(record: &T, settings: &FilterSettings, categories: &CategoryMap) -> bool {
    // 1. free-text query: plain substring, case-insensitive
    let query = settings.query.trim().to_lowercase();
    if !query.is_empty()
        && !record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    {
        return false;
    }

    // 2. property: wildcard on the filter or the record short-circuits to true
    if settings.property != WILDCARD
        && record.property() != WILDCARD
        && record.property() != settings.property
    {
        return false;
    }

    // 3. category, through the translation table
    if settings.category != WILDCARD {
        let passes = match categories.resolve(&settings.category) {
            Some(display) => record.category() == Some(display),
            // Strict policy, unmapped key: matches nothing
            None => false,
        };
        if !passes {
            return false;
        }
    }

    // 4. status: literal equality
    if settings.status != WILDCARD && record.status() != Some(settings.status.as_str()) {
        return false;
    }

    true
}

/// Reduce a catalog to the records matching `settings`.
///
/// Stable: the output preserves the input's relative order and contains no
/// duplicates the input did not have. The input is not mutated.
pub fn apply_filter<T: Filterable + Clone>(
    items: &[T],
    settings: &FilterSettings,
    categories: &CategoryMap,
) -> Vec<T> {
    items
        .iter()
        .filter(|record| matches(*record, settings, categories))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_inventory_item::InventoryItem;
    use crate::domain::a004_playlist::Playlist;
    use crate::enums::ItemStatus;
    use crate::shared::categories::{category_map, CatalogKind, CategoryMap, UnmappedKeyPolicy};

    fn fixture() -> Vec<InventoryItem> {
        vec![
            InventoryItem {
                id: 1,
                name: "Bean Bag".to_string(),
                category: "Furniture".to_string(),
                area: "Common Lounge".to_string(),
                status: ItemStatus::Perfect,
                property: "zo-house-bali".to_string(),
                quantity: 12,
                price: 45.0,
            },
            InventoryItem {
                id: 2,
                name: "Table Lamp".to_string(),
                category: "Electronics".to_string(),
                area: "Reception".to_string(),
                status: ItemStatus::Defect,
                property: "zo-house-thailand".to_string(),
                quantity: 4,
                price: 18.5,
            },
            InventoryItem {
                id: 3,
                name: "Welcome Sign".to_string(),
                category: "Decor".to_string(),
                area: "Entrance".to_string(),
                status: ItemStatus::Perfect,
                property: "all".to_string(),
                quantity: 1,
                price: 120.0,
            },
        ]
    }

    fn inventory_map() -> CategoryMap {
        category_map(CatalogKind::Inventory)
    }

    fn settings() -> FilterSettings {
        FilterSettings::default()
    }

    #[test]
    fn identity_settings_return_the_whole_catalog() {
        let catalog = fixture();
        let result = apply_filter(&catalog, &settings(), &inventory_map());
        assert_eq!(result, catalog);
    }

    #[test]
    fn result_is_an_order_preserving_subsequence() {
        let catalog = fixture();
        let filtered = apply_filter(
            &catalog,
            &FilterSettings {
                status: "Perfect".to_string(),
                ..settings()
            },
            &inventory_map(),
        );
        let ids: Vec<u32> = filtered.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 3]);
        // input untouched
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = fixture();
        let filter = FilterSettings {
            query: "a".to_string(),
            status: "Perfect".to_string(),
            ..settings()
        };
        let once = apply_filter(&catalog, &filter, &inventory_map());
        let twice = apply_filter(&once, &filter, &inventory_map());
        assert_eq!(once, twice);
    }

    #[test]
    fn query_is_case_insensitive() {
        let catalog = fixture();
        let upper = apply_filter(
            &catalog,
            &FilterSettings {
                query: "BEAN".to_string(),
                ..settings()
            },
            &inventory_map(),
        );
        let lower = apply_filter(
            &catalog,
            &FilterSettings {
                query: "bean".to_string(),
                ..settings()
            },
            &inventory_map(),
        );
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].name, "Bean Bag");
    }

    #[test]
    fn query_searches_category_and_area_too() {
        let catalog = fixture();
        let by_category = apply_filter(
            &catalog,
            &FilterSettings {
                query: "electron".to_string(),
                ..settings()
            },
            &inventory_map(),
        );
        assert_eq!(by_category[0].id, 2);

        let by_area = apply_filter(
            &catalog,
            &FilterSettings {
                query: "reception".to_string(),
                ..settings()
            },
            &inventory_map(),
        );
        assert_eq!(by_area[0].id, 2);
    }

    #[test]
    fn status_filter_selects_defects() {
        let catalog = fixture();
        let result = apply_filter(
            &catalog,
            &FilterSettings {
                status: "Defect".to_string(),
                ..settings()
            },
            &inventory_map(),
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Table Lamp");
    }

    #[test]
    fn property_filter_keeps_wildcard_records() {
        let catalog = fixture();
        let result = apply_filter(
            &catalog,
            &FilterSettings {
                property: "zo-house-bali".to_string(),
                ..settings()
            },
            &inventory_map(),
        );
        // Bean Bag (bali) plus the Welcome Sign (property == "all")
        let ids: Vec<u32> = result.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn category_filter_goes_through_the_translation_table() {
        let catalog = fixture();
        let result = apply_filter(
            &catalog,
            &FilterSettings {
                category: "furniture".to_string(),
                ..settings()
            },
            &inventory_map(),
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Bean Bag");
    }

    #[test]
    fn unmapped_category_key_compares_literally_by_default() {
        let catalog = fixture();
        let result = apply_filter(
            &catalog,
            &FilterSettings {
                category: "Decor".to_string(),
                ..settings()
            },
            &inventory_map(),
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 3);
    }

    #[test]
    fn unmapped_category_key_matches_nothing_under_strict() {
        let catalog = fixture();
        let strict = inventory_map().with_policy(UnmappedKeyPolicy::Strict);
        let result = apply_filter(
            &catalog,
            &FilterSettings {
                category: "Decor".to_string(),
                ..settings()
            },
            &strict,
        );
        assert!(result.is_empty());
    }

    #[test]
    fn record_without_category_matches_only_the_wildcard() {
        let playlists = vec![Playlist {
            id: 1,
            name: "Morning Loop".to_string(),
            property: "zo-house-bali".to_string(),
            item_count: 6,
            total_duration_secs: 540,
            updated_at: crate::domain::fixture_ts(2026, 8, 10, 8, 0),
        }];
        let all = apply_filter(&playlists, &settings(), &CategoryMap::empty());
        assert_eq!(all.len(), 1);

        let categorized = apply_filter(
            &playlists,
            &FilterSettings {
                category: "promo".to_string(),
                ..settings()
            },
            &CategoryMap::empty(),
        );
        assert!(categorized.is_empty());
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        let catalog: Vec<InventoryItem> = Vec::new();
        let result = apply_filter(&catalog, &settings(), &inventory_map());
        assert!(result.is_empty());
    }

    #[test]
    fn conjunction_of_all_clauses() {
        let catalog = fixture();
        let result = apply_filter(
            &catalog,
            &FilterSettings {
                query: "bean".to_string(),
                property: "zo-house-bali".to_string(),
                category: "furniture".to_string(),
                status: "Perfect".to_string(),
            },
            &inventory_map(),
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);

        // same settings, contradictory status
        let none = apply_filter(
            &catalog,
            &FilterSettings {
                query: "bean".to_string(),
                property: "zo-house-bali".to_string(),
                category: "furniture".to_string(),
                status: "Defect".to_string(),
            },
            &inventory_map(),
        );
        assert!(none.is_empty());
    }

    #[test]
    fn active_count_reflects_non_default_controls() {
        assert_eq!(settings().active_count(), 0);
        assert!(settings().is_identity());
        let filter = FilterSettings {
            query: "lamp".to_string(),
            property: "zo-house-thailand".to_string(),
            ..settings()
        };
        assert_eq!(filter.active_count(), 2);
        assert!(!filter.is_identity());
    }
}
