//! Static schedules catalog.

use super::aggregate::ScheduleEntry;
use crate::enums::ScheduleState;

fn entry(
    id: u32,
    playlist: &str,
    screen: &str,
    area: &str,
    property: &str,
    days: &str,
    starts_at: &str,
    ends_at: &str,
    state: ScheduleState,
) -> ScheduleEntry {
    ScheduleEntry {
        id,
        playlist: playlist.to_string(),
        screen: screen.to_string(),
        area: area.to_string(),
        property: property.to_string(),
        days: days.to_string(),
        starts_at: starts_at.to_string(),
        ends_at: ends_at.to_string(),
        state,
    }
}

#[rustfmt::skip]
pub fn schedules_catalog() -> Vec<ScheduleEntry> {
    use ScheduleState::{Active, Paused};
    vec![
        entry(1, "Welcome Loop", "Lobby Portal", "Reception", "zo-house-bali", "Daily", "07:00", "23:00", Active),
        entry(2, "Breakfast Menu", "Cafe Menu Board", "Cafe Counter", "zo-house-bali", "Daily", "06:30", "11:00", Active),
        entry(3, "Events This Week", "Event Wall", "Event Hall", "zo-house-thailand", "Mon-Fri", "09:00", "21:00", Paused),
        entry(4, "Community Feed", "Coworking Portal", "Coworking", "zo-house-whitefield", "Mon-Sat", "08:00", "20:00", Active),
        entry(5, "Sunset Sessions", "Rooftop Portal", "Rooftop", "zo-house-thailand", "Fri-Sun", "17:00", "22:00", Active),
        entry(6, "Wayfinding", "Corridor Strip", "Corridor", "zo-house-whitefield", "Daily", "00:00", "23:59", Paused),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_unique_ids() {
        let catalog = schedules_catalog();
        let ids: HashSet<u32> = catalog.iter().map(|entry| entry.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn time_windows_are_well_formed() {
        for entry in schedules_catalog() {
            assert_eq!(entry.starts_at.len(), 5, "bad start: {}", entry.starts_at);
            assert_eq!(entry.ends_at.len(), 5, "bad end: {}", entry.ends_at);
            assert!(entry.starts_at < entry.ends_at, "inverted window on id {}", entry.id);
        }
    }
}
