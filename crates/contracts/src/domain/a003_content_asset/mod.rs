pub mod aggregate;
pub mod catalog;

pub use aggregate::ContentAsset;
pub use catalog::content_catalog;
