use crate::shared::filtering::Filterable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An ordered rotation of content assets.
///
/// Playlists carry no category or status, so those filter controls only
/// pass them through on the wildcard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: u32,
    pub name: String,
    pub property: String,
    pub item_count: u32,
    pub total_duration_secs: u32,
    pub updated_at: DateTime<Utc>,
}

impl Filterable for Playlist {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn property(&self) -> &str {
        &self.property
    }
}
