use crate::domain::property_label;
use crate::shared::components::ui::Select;
use crate::shared::components::{FilterPanel, SearchInput};
use crate::shared::date_utils::{format_datetime, format_duration};
use contracts::domain::a004_playlist::playlists_catalog;
use contracts::shared::categories::CategoryMap;
use contracts::shared::filtering::{apply_filter, FilterSettings, WILDCARD};
use leptos::prelude::*;

/// Ordered collections of content assets.
#[component]
#[allow(non_snake_case)]
pub fn PlaylistsList() -> impl IntoView {
    let catalog = StoredValue::new(playlists_catalog());
    let total = catalog.with_value(|items| items.len());

    let (query, set_query) = signal(String::new());
    let (property_filter, set_property_filter) = signal(WILDCARD.to_string());
    let filter_expanded = RwSignal::new(true);

    let settings = Memo::new(move |_| FilterSettings {
        query: query.get(),
        property: property_filter.get(),
        category: WILDCARD.to_string(),
        status: WILDCARD.to_string(),
    });

    let rows = Memo::new(move |_| {
        let settings = settings.get();
        catalog.with_value(|items| apply_filter(items, &settings, &CategoryMap::empty()))
    });

    let active_count = Signal::derive(move || settings.get().active_count());

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Playlists"</h1>
                </div>
            </div>

            <FilterPanel
                is_expanded=filter_expanded
                active_filters_count=active_count
                summary=move || view! {
                    <span class="filter-panel__summary">
                        {move || format!("{} of {} playlists", rows.get().len(), total)}
                    </span>
                }
                filter_content=move || view! {
                    <div class="filter-panel__row">
                        <SearchInput
                            value=query
                            on_change=Callback::new(move |v: String| set_query.set(v))
                            placeholder="Search by name..."
                        />
                        <Select
                            label="Property"
                            value=property_filter
                            on_change=Callback::new(move |v: String| set_property_filter.set(v))
                            options=contracts::enums::Property::options()
                        />
                    </div>
                }
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Property"</th>
                            <th class="table__header-cell table__header-cell--right">"Items"</th>
                            <th class="table__header-cell table__header-cell--right">"Total duration"</th>
                            <th class="table__header-cell">"Updated"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|playlist| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{playlist.name}</td>
                                    <td class="table__cell">{property_label(&playlist.property)}</td>
                                    <td class="table__cell table__cell--right">{playlist.item_count}</td>
                                    <td class="table__cell table__cell--right">
                                        {format_duration(playlist.total_duration_secs)}
                                    </td>
                                    <td class="table__cell">{format_datetime(playlist.updated_at)}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
