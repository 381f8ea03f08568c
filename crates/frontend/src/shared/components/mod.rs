pub mod filter_panel;
pub mod search_input;
pub mod stat_card;
pub mod ui;

pub use filter_panel::FilterPanel;
pub use search_input::SearchInput;
pub use stat_card::StatCard;
