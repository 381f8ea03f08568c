//! Tab content registry - single source of truth for the tab.key → View
//! mapping. All tab keys are collected here in one place.

use crate::dashboards::d400_home::HomeDashboard;
use crate::domain::a001_inventory_item::ui::list::{InventoryList, InventoryScope};
use crate::domain::a002_screen::ui::list::ScreensList;
use crate::domain::a003_content_asset::ui::list::ContentList;
use crate::domain::a004_playlist::ui::list::PlaylistsList;
use crate::domain::a005_schedule::ui::list::SchedulesList;
use leptos::prelude::*;

/// Render the content of a tab by its key.
///
/// Unknown keys get a placeholder page instead of panicking: a stale URL
/// must not take the whole shell down.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "d400_home" => view! { <HomeDashboard /> }.into_any(),

        "a001_inventory_zones" => {
            view! { <InventoryList scope=InventoryScope::Zones /> }.into_any()
        }
        "a001_inventory_kitchen" => {
            view! { <InventoryList scope=InventoryScope::Kitchen /> }.into_any()
        }

        "a002_screens" => view! { <ScreensList /> }.into_any(),
        "a003_content" => view! { <ContentList /> }.into_any(),
        "a004_playlists" => view! { <PlaylistsList /> }.into_any(),
        "a005_schedules" => view! { <SchedulesList /> }.into_any(),

        unknown => {
            leptos::logging::log!("registry: no view for tab key '{}'", unknown);
            let unknown = unknown.to_string();
            view! {
                <div class="page">
                    <div class="warning-box">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">
                            {format!("Unknown tab: {unknown}")}
                        </span>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
