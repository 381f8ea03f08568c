use crate::enums::ContentKind;
use crate::shared::filtering::Filterable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A media asset available to signage playlists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAsset {
    pub id: u32,
    pub title: String,
    pub kind: ContentKind,

    /// Display form of the category, e.g. `"Promo"`.
    pub category: String,

    pub property: String,
    pub duration_secs: u32,
    pub size_mb: f64,
    pub uploaded_at: DateTime<Utc>,
}

impl Filterable for ContentAsset {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.category]
    }

    fn property(&self) -> &str {
        &self.property
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}
