pub mod aggregate;
pub mod catalog;

pub use aggregate::InventoryItem;
pub use catalog::{kitchen_catalog, zones_catalog};
