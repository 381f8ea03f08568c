//! Tab labels - single source of truth for tab titles.

/// Human-readable tab title for a given key. Fallback: empty string.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Dashboards (d4xx) ────────────────────────────────────────────
        "d400_home" => "Home",

        // ── Inventory (a001) ─────────────────────────────────────────────
        "a001_inventory_zones" => "Inventory · Zones",
        "a001_inventory_kitchen" => "Inventory · Kitchen",

        // ── Portals (a002-a005) ──────────────────────────────────────────
        "a002_screens" => "Screens",
        "a003_content" => "Content",
        "a004_playlists" => "Playlists",
        "a005_schedules" => "Schedules",

        // ── Fallback ─────────────────────────────────────────────────────
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sidebar_key_has_a_label() {
        for key in [
            "d400_home",
            "a001_inventory_zones",
            "a001_inventory_kitchen",
            "a002_screens",
            "a003_content",
            "a004_playlists",
            "a005_schedules",
        ] {
            assert!(!tab_label_for_key(key).is_empty(), "missing label: {key}");
        }
    }

    #[test]
    fn unknown_key_falls_back_to_empty() {
        assert_eq!(tab_label_for_key("no_such_tab"), "");
    }
}
