//! Static content-asset catalog.

use super::aggregate::ContentAsset;
use crate::domain::fixture_ts;
use crate::enums::ContentKind;

fn asset(
    id: u32,
    title: &str,
    kind: ContentKind,
    category: &str,
    property: &str,
    duration_secs: u32,
    size_mb: f64,
    uploaded: (u32, u32),
) -> ContentAsset {
    let (month, day) = uploaded;
    ContentAsset {
        id,
        title: title.to_string(),
        kind,
        category: category.to_string(),
        property: property.to_string(),
        duration_secs,
        size_mb,
        uploaded_at: fixture_ts(2026, month, day, 12, 0),
    }
}

#[rustfmt::skip]
pub fn content_catalog() -> Vec<ContentAsset> {
    use ContentKind::{Image, Video};
    vec![
        asset(1, "Welcome Loop", Video, "Ambient", "all", 90, 214.0, (7, 2)),
        asset(2, "Breakfast Menu", Image, "Menu", "zo-house-bali", 15, 2.4, (8, 1)),
        asset(3, "Events This Week", Image, "Events", "zo-house-thailand", 20, 3.1, (8, 24)),
        asset(4, "Founders Meetup Promo", Video, "Promo", "zo-house-whitefield", 45, 98.5, (8, 18)),
        asset(5, "Sunset Sessions Teaser", Video, "Events", "zo-house-thailand", 30, 76.2, (8, 12)),
        asset(6, "House Rules", Image, "Ambient", "all", 25, 1.8, (6, 15)),
        asset(7, "Dinner Menu", Image, "Menu", "zo-house-bali", 15, 2.6, (8, 20)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_unique_ids() {
        let catalog = content_catalog();
        let ids: HashSet<u32> = catalog.iter().map(|asset| asset.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn categories_use_the_display_form() {
        use crate::shared::categories::{category_map, CatalogKind};
        let map = category_map(CatalogKind::Content);
        for asset in content_catalog() {
            let key = asset.category.to_lowercase();
            assert_eq!(map.resolve(&key), Some(asset.category.as_str()));
        }
    }
}
