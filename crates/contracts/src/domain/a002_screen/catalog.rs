//! Static screens catalog.

use super::aggregate::Screen;
use crate::domain::fixture_ts;
use crate::enums::ScreenStatus;

fn screen(
    id: u32,
    name: &str,
    area: &str,
    property: &str,
    status: ScreenStatus,
    resolution: &str,
    current_playlist: &str,
    last_seen: (u32, u32, u32, u32),
) -> Screen {
    let (month, day, hour, minute) = last_seen;
    Screen {
        id,
        name: name.to_string(),
        area: area.to_string(),
        property: property.to_string(),
        status,
        resolution: resolution.to_string(),
        current_playlist: current_playlist.to_string(),
        last_seen: fixture_ts(2026, month, day, hour, minute),
    }
}

#[rustfmt::skip]
pub fn screens_catalog() -> Vec<Screen> {
    use ScreenStatus::{Offline, Online, Syncing};
    vec![
        screen(1, "Lobby Portal", "Reception", "zo-house-bali", Online, "1920x1080", "Welcome Loop", (8, 30, 9, 42)),
        screen(2, "Cafe Menu Board", "Cafe Counter", "zo-house-bali", Online, "1080x1920", "Breakfast Menu", (8, 30, 9, 40)),
        screen(3, "Event Wall", "Event Hall", "zo-house-thailand", Offline, "3840x2160", "Events This Week", (8, 28, 18, 5)),
        screen(4, "Coworking Portal", "Coworking", "zo-house-whitefield", Online, "1920x1080", "Community Feed", (8, 30, 9, 38)),
        screen(5, "Rooftop Portal", "Rooftop", "zo-house-thailand", Syncing, "1920x1080", "Sunset Sessions", (8, 30, 9, 12)),
        screen(6, "Corridor Strip", "Corridor", "zo-house-whitefield", Offline, "1080x1920", "Wayfinding", (8, 29, 22, 47)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_unique_ids() {
        let catalog = screens_catalog();
        let ids: HashSet<u32> = catalog.iter().map(|screen| screen.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }
}
