pub mod content_kind;
pub mod item_status;
pub mod property;
pub mod schedule_state;
pub mod screen_status;

pub use content_kind::ContentKind;
pub use item_status::ItemStatus;
pub use property::Property;
pub use schedule_state::ScheduleState;
pub use screen_status::ScreenStatus;
