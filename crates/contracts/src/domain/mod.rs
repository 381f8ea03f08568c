pub mod a001_inventory_item;
pub mod a002_screen;
pub mod a003_content_asset;
pub mod a004_playlist;
pub mod a005_schedule;

use chrono::{DateTime, TimeZone, Utc};

/// Fixed timestamp for catalog fixtures.
pub(crate) fn fixture_ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
