use crate::domain::property_label;
use crate::shared::components::ui::{Badge, Select};
use crate::shared::components::{FilterPanel, SearchInput};
use contracts::domain::a005_schedule::schedules_catalog;
use contracts::enums::ScheduleState;
use contracts::shared::categories::CategoryMap;
use contracts::shared::filtering::{apply_filter, FilterSettings, WILDCARD};
use leptos::prelude::*;

/// Assignment of playlists to screens with a weekly time window.
#[component]
#[allow(non_snake_case)]
pub fn SchedulesList() -> impl IntoView {
    let catalog = StoredValue::new(schedules_catalog());
    let total = catalog.with_value(|items| items.len());

    let (query, set_query) = signal(String::new());
    let (property_filter, set_property_filter) = signal(WILDCARD.to_string());
    let (state_filter, set_state_filter) = signal(WILDCARD.to_string());
    let filter_expanded = RwSignal::new(true);

    let settings = Memo::new(move |_| FilterSettings {
        query: query.get(),
        property: property_filter.get(),
        category: WILDCARD.to_string(),
        status: state_filter.get(),
    });

    let rows = Memo::new(move |_| {
        let settings = settings.get();
        catalog.with_value(|items| apply_filter(items, &settings, &CategoryMap::empty()))
    });

    let active_count = Signal::derive(move || settings.get().active_count());

    let state_options: Vec<(String, String)> =
        std::iter::once((WILDCARD.to_string(), "All states".to_string()))
            .chain(
                ScheduleState::all()
                    .into_iter()
                    .map(|s| (s.code().to_string(), s.code().to_string())),
            )
            .collect();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Schedules"</h1>
                </div>
            </div>

            <FilterPanel
                is_expanded=filter_expanded
                active_filters_count=active_count
                summary=move || view! {
                    <span class="filter-panel__summary">
                        {move || format!("{} of {} schedules", rows.get().len(), total)}
                    </span>
                }
                filter_content=move || view! {
                    <div class="filter-panel__row">
                        <SearchInput
                            value=query
                            on_change=Callback::new(move |v: String| set_query.set(v))
                            placeholder="Search by playlist, screen or area..."
                        />
                        <Select
                            label="Property"
                            value=property_filter
                            on_change=Callback::new(move |v: String| set_property_filter.set(v))
                            options=contracts::enums::Property::options()
                        />
                        <Select
                            label="State"
                            value=state_filter
                            on_change=Callback::new(move |v: String| set_state_filter.set(v))
                            options=state_options.clone()
                        />
                    </div>
                }
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Playlist"</th>
                            <th class="table__header-cell">"Screen"</th>
                            <th class="table__header-cell">"Area"</th>
                            <th class="table__header-cell">"Property"</th>
                            <th class="table__header-cell">"Days"</th>
                            <th class="table__header-cell">"Window"</th>
                            <th class="table__header-cell">"State"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|entry| {
                            let window = format!("{} - {}", entry.starts_at, entry.ends_at);
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{entry.playlist}</td>
                                    <td class="table__cell">{entry.screen}</td>
                                    <td class="table__cell">{entry.area}</td>
                                    <td class="table__cell">{property_label(&entry.property)}</td>
                                    <td class="table__cell">{entry.days}</td>
                                    <td class="table__cell">{window}</td>
                                    <td class="table__cell">
                                        <Badge variant=entry.state.badge_variant()>
                                            {entry.state.code()}
                                        </Badge>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
