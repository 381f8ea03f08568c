//! Static playlists catalog.

use super::aggregate::Playlist;
use crate::domain::fixture_ts;

fn playlist(
    id: u32,
    name: &str,
    property: &str,
    item_count: u32,
    total_duration_secs: u32,
    updated: (u32, u32),
) -> Playlist {
    let (month, day) = updated;
    Playlist {
        id,
        name: name.to_string(),
        property: property.to_string(),
        item_count,
        total_duration_secs,
        updated_at: fixture_ts(2026, month, day, 10, 30),
    }
}

#[rustfmt::skip]
pub fn playlists_catalog() -> Vec<Playlist> {
    vec![
        playlist(1, "Welcome Loop", "all", 4, 180, (8, 2)),
        playlist(2, "Breakfast Menu", "zo-house-bali", 3, 60, (8, 21)),
        playlist(3, "Events This Week", "zo-house-thailand", 5, 140, (8, 24)),
        playlist(4, "Community Feed", "zo-house-whitefield", 6, 220, (8, 26)),
        playlist(5, "Sunset Sessions", "zo-house-thailand", 4, 150, (8, 12)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_unique_ids() {
        let catalog = playlists_catalog();
        let ids: HashSet<u32> = catalog.iter().map(|playlist| playlist.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }
}
