pub mod aggregate;
pub mod catalog;

pub use aggregate::Screen;
pub use catalog::screens_catalog;
