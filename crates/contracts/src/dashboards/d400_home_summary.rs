//! Home dashboard contract: one static snapshot of business statistics.
//!
//! Revenue and occupancy are fixed mock figures; the defect and screen
//! counters are derived from the catalogs so the cards stay consistent
//! with what the list views show.

use crate::domain::a001_inventory_item::{kitchen_catalog, zones_catalog};
use crate::domain::a002_screen::screens_catalog;
use crate::enums::{ItemStatus, ScreenStatus};
use crate::shared::indicators::{IndicatorId, IndicatorMeta, IndicatorStatus, IndicatorValue, ValueFormat};

fn meta(id: &str, label: &str, icon: &str, format: ValueFormat) -> IndicatorMeta {
    IndicatorMeta {
        id: IndicatorId::new(id),
        label: label.to_string(),
        icon: icon.to_string(),
        format,
    }
}

fn value(
    id: &str,
    value: Option<f64>,
    change_percent: Option<f64>,
    status: IndicatorStatus,
    subtitle: Option<&str>,
) -> IndicatorValue {
    IndicatorValue {
        id: IndicatorId::new(id),
        value,
        change_percent,
        status,
        subtitle: subtitle.map(str::to_string),
    }
}

/// The card set rendered on the home dashboard, in display order.
pub fn home_summary() -> Vec<(IndicatorMeta, IndicatorValue)> {
    let open_defects = zones_catalog()
        .iter()
        .chain(kitchen_catalog().iter())
        .filter(|item| item.status == ItemStatus::Defect)
        .count() as f64;

    let screens = screens_catalog();
    let screens_online = screens
        .iter()
        .filter(|screen| screen.status == ScreenStatus::Online)
        .count();

    vec![
        (
            meta("occupancy", "Occupancy", "home", ValueFormat::Percent { decimals: 1 }),
            value("occupancy", Some(86.4), Some(3.2), IndicatorStatus::Good, Some("across 3 properties")),
        ),
        (
            meta("monthly_revenue", "Revenue (month)", "cash", ValueFormat::Money { currency: "USD".to_string() }),
            value("monthly_revenue", Some(412_800.0), Some(5.8), IndicatorStatus::Good, None),
        ),
        (
            meta("active_members", "Active members", "users", ValueFormat::Integer),
            value("active_members", Some(1_240.0), Some(-1.1), IndicatorStatus::Neutral, None),
        ),
        (
            meta("open_defects", "Open defects", "alert", ValueFormat::Integer),
            value(
                "open_defects",
                Some(open_defects),
                None,
                if open_defects > 0.0 { IndicatorStatus::Warning } else { IndicatorStatus::Good },
                Some("inventory items flagged Defect"),
            ),
        ),
        (
            meta("screens_online", "Screens online", "monitor", ValueFormat::Integer),
            value(
                "screens_online",
                Some(screens_online as f64),
                None,
                if screens_online == screens.len() { IndicatorStatus::Good } else { IndicatorStatus::Warning },
                Some("of all portals"),
            ),
        ),
        (
            meta("events_week", "Events this week", "calendar", ValueFormat::Integer),
            value("events_week", Some(14.0), Some(16.7), IndicatorStatus::Good, None),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_counters_match_the_catalogs() {
        let summary = home_summary();
        let defects = summary
            .iter()
            .find(|(meta, _)| meta.id.0 == "open_defects")
            .and_then(|(_, value)| value.value);
        let expected = zones_catalog()
            .iter()
            .chain(kitchen_catalog().iter())
            .filter(|item| item.status == ItemStatus::Defect)
            .count() as f64;
        assert_eq!(defects, Some(expected));
    }

    #[test]
    fn every_card_has_a_distinct_id() {
        use std::collections::HashSet;
        let summary = home_summary();
        let ids: HashSet<String> = summary.iter().map(|(meta, _)| meta.id.0.clone()).collect();
        assert_eq!(ids.len(), summary.len());
    }
}
