//! Static inventory catalogs.
//!
//! Constructed once per view instantiation and never mutated; filtering
//! always produces a new sequence.

use super::aggregate::InventoryItem;
use crate::enums::ItemStatus;

fn item(
    id: u32,
    name: &str,
    category: &str,
    area: &str,
    status: ItemStatus,
    property: &str,
    quantity: u32,
    price: f64,
) -> InventoryItem {
    InventoryItem {
        id,
        name: name.to_string(),
        category: category.to_string(),
        area: area.to_string(),
        status,
        property: property.to_string(),
        quantity,
        price,
    }
}

/// Inventory tracked per common-area zone.
#[rustfmt::skip]
pub fn zones_catalog() -> Vec<InventoryItem> {
    use ItemStatus::{Defect, Perfect};
    vec![
        item(1, "Bean Bag", "Furniture", "Common Lounge", Perfect, "zo-house-bali", 12, 45.0),
        item(2, "Table Lamp", "Electronics", "Reception", Defect, "zo-house-thailand", 4, 18.5),
        item(3, "Projector", "Electronics", "Event Hall", Perfect, "zo-house-bali", 2, 420.0),
        item(4, "Lounge Sofa", "Furniture", "Common Lounge", Perfect, "zo-house-whitefield", 3, 650.0),
        item(5, "Wall Tapestry", "Decor", "Corridor", Perfect, "zo-house-bali", 6, 35.0),
        item(6, "Standing Fan", "Electronics", "Coworking", Defect, "zo-house-whitefield", 5, 42.0),
        item(7, "Bookshelf", "Furniture", "Library Corner", Perfect, "zo-house-thailand", 2, 180.0),
        item(8, "Welcome Sign", "Decor", "Entrance", Perfect, "all", 1, 120.0),
        item(9, "Yoga Mat", "Linens", "Rooftop", Perfect, "zo-house-bali", 20, 15.0),
        item(10, "Beanstalk Planter", "Decor", "Reception", Defect, "zo-house-thailand", 3, 27.5),
    ]
}

/// Inventory tracked per kitchen station.
#[rustfmt::skip]
pub fn kitchen_catalog() -> Vec<InventoryItem> {
    use ItemStatus::{Defect, Perfect};
    vec![
        item(1, "Induction Cooktop", "Electronics", "Hot Station", Perfect, "zo-house-bali", 2, 310.0),
        item(2, "Chef Knife Set", "Kitchenware", "Prep Station", Perfect, "zo-house-thailand", 3, 95.0),
        item(3, "Stock Pot 20L", "Kitchenware", "Hot Station", Defect, "zo-house-bali", 4, 60.0),
        item(4, "Apron Set", "Linens", "Prep Station", Perfect, "all", 15, 8.0),
        item(5, "Espresso Machine", "Electronics", "Cafe Counter", Perfect, "zo-house-whitefield", 1, 1250.0),
        item(6, "Serving Tray", "Kitchenware", "Pass", Perfect, "zo-house-thailand", 18, 9.5),
        item(7, "Cold Room Shelf", "Furniture", "Cold Storage", Defect, "zo-house-whitefield", 6, 75.0),
        item(8, "Mixing Bowl Set", "Kitchenware", "Prep Station", Perfect, "zo-house-bali", 8, 22.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn unique_ids(catalog: &[InventoryItem]) -> bool {
        let ids: HashSet<u32> = catalog.iter().map(|item| item.id).collect();
        ids.len() == catalog.len()
    }

    #[test]
    fn catalogs_are_non_empty_with_unique_ids() {
        let zones = zones_catalog();
        let kitchen = kitchen_catalog();
        assert!(!zones.is_empty());
        assert!(!kitchen.is_empty());
        assert!(unique_ids(&zones));
        assert!(unique_ids(&kitchen));
    }

    #[test]
    fn every_property_code_is_known() {
        use crate::enums::Property;
        for item in zones_catalog().iter().chain(kitchen_catalog().iter()) {
            assert!(
                Property::from_code(&item.property).is_some(),
                "unknown property code: {}",
                item.property
            );
        }
    }
}
