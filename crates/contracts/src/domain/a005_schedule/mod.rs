pub mod aggregate;
pub mod catalog;

pub use aggregate::ScheduleEntry;
pub use catalog::schedules_catalog;
