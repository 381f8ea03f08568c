pub mod categories;
pub mod filtering;
pub mod indicators;
