use crate::enums::ScheduleState;
use crate::shared::filtering::Filterable;
use serde::{Deserialize, Serialize};

/// Assignment of a playlist to a screen over a recurring time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: u32,
    pub playlist: String,
    pub screen: String,
    pub area: String,
    pub property: String,

    /// Recurrence label, e.g. `"Mon-Fri"`.
    pub days: String,

    /// Local wall-clock bounds, `"HH:MM"`.
    pub starts_at: String,
    pub ends_at: String,

    pub state: ScheduleState,
}

impl Filterable for ScheduleEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.playlist, &self.screen, &self.area]
    }

    fn property(&self) -> &str {
        &self.property
    }

    fn status(&self) -> Option<&str> {
        Some(self.state.code())
    }
}
