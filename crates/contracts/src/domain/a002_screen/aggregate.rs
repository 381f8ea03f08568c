use crate::enums::ScreenStatus;
use crate::shared::filtering::Filterable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A signage screen ("Portal") mounted somewhere at a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    pub id: u32,
    pub name: String,

    /// Physical placement, e.g. `"Reception"`.
    pub area: String,

    pub property: String,
    pub status: ScreenStatus,
    pub resolution: String,

    /// Name of the playlist currently assigned.
    pub current_playlist: String,

    pub last_seen: DateTime<Utc>,
}

impl Filterable for Screen {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.area, &self.current_playlist]
    }

    fn property(&self) -> &str {
        &self.property
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.code())
    }
}
