use crate::enums::ItemStatus;
use crate::shared::filtering::Filterable;
use serde::{Deserialize, Serialize};

/// A physical asset tracked at one property.
///
/// `property == "all"` marks stock shared across every property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: u32,

    #[serde(rename = "itemName")]
    pub name: String,

    /// Display form of the category, e.g. `"Furniture"`.
    pub category: String,

    /// Where the item lives (zone or kitchen station).
    pub area: String,

    pub status: ItemStatus,
    pub property: String,
    pub quantity: u32,
    pub price: f64,
}

impl Filterable for InventoryItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.category, &self.area]
    }

    fn property(&self) -> &str {
        &self.property
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_the_documented_field_names() {
        let item = InventoryItem {
            id: 7,
            name: "Bean Bag".to_string(),
            category: "Furniture".to_string(),
            area: "Common Lounge".to_string(),
            status: ItemStatus::Perfect,
            property: "zo-house-bali".to_string(),
            quantity: 12,
            price: 45.0,
        };
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&item).unwrap()).unwrap();
        assert_eq!(json["itemName"], "Bean Bag");
        assert_eq!(json["status"], "Perfect");
        assert_eq!(json["property"], "zo-house-bali");
        assert_eq!(json["quantity"], 12);
    }
}
