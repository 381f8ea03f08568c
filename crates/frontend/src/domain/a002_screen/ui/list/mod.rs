use crate::domain::property_label;
use crate::shared::components::ui::{Badge, Select};
use crate::shared::components::{FilterPanel, SearchInput};
use crate::shared::date_utils::format_datetime;
use contracts::domain::a002_screen::screens_catalog;
use contracts::enums::ScreenStatus;
use contracts::shared::categories::CategoryMap;
use contracts::shared::filtering::{apply_filter, FilterSettings, WILDCARD};
use leptos::prelude::*;

/// Registered signage screens across all properties.
#[component]
#[allow(non_snake_case)]
pub fn ScreensList() -> impl IntoView {
    let catalog = StoredValue::new(screens_catalog());
    let total = catalog.with_value(|items| items.len());

    let (query, set_query) = signal(String::new());
    let (property_filter, set_property_filter) = signal(WILDCARD.to_string());
    let (status_filter, set_status_filter) = signal(WILDCARD.to_string());
    let filter_expanded = RwSignal::new(true);

    // Screens carry no category, the clause stays at the wildcard.
    let settings = Memo::new(move |_| FilterSettings {
        query: query.get(),
        property: property_filter.get(),
        category: WILDCARD.to_string(),
        status: status_filter.get(),
    });

    let rows = Memo::new(move |_| {
        let settings = settings.get();
        catalog.with_value(|items| apply_filter(items, &settings, &CategoryMap::empty()))
    });

    let active_count = Signal::derive(move || settings.get().active_count());

    let status_options: Vec<(String, String)> =
        std::iter::once((WILDCARD.to_string(), "All statuses".to_string()))
            .chain(
                ScreenStatus::all()
                    .into_iter()
                    .map(|s| (s.code().to_string(), s.code().to_string())),
            )
            .collect();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Screens"</h1>
                </div>
            </div>

            <FilterPanel
                is_expanded=filter_expanded
                active_filters_count=active_count
                summary=move || view! {
                    <span class="filter-panel__summary">
                        {move || format!("{} of {} screens", rows.get().len(), total)}
                    </span>
                }
                filter_content=move || view! {
                    <div class="filter-panel__row">
                        <SearchInput
                            value=query
                            on_change=Callback::new(move |v: String| set_query.set(v))
                            placeholder="Search by name, area or playlist..."
                        />
                        <Select
                            label="Property"
                            value=property_filter
                            on_change=Callback::new(move |v: String| set_property_filter.set(v))
                            options=contracts::enums::Property::options()
                        />
                        <Select
                            label="Status"
                            value=status_filter
                            on_change=Callback::new(move |v: String| set_status_filter.set(v))
                            options=status_options.clone()
                        />
                    </div>
                }
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Area"</th>
                            <th class="table__header-cell">"Property"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Resolution"</th>
                            <th class="table__header-cell">"Current playlist"</th>
                            <th class="table__header-cell">"Last seen"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|screen| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{screen.name}</td>
                                    <td class="table__cell">{screen.area}</td>
                                    <td class="table__cell">{property_label(&screen.property)}</td>
                                    <td class="table__cell">
                                        <Badge variant=screen.status.badge_variant()>
                                            {screen.status.code()}
                                        </Badge>
                                    </td>
                                    <td class="table__cell">{screen.resolution}</td>
                                    <td class="table__cell">{screen.current_playlist}</td>
                                    <td class="table__cell">{format_datetime(screen.last_seen)}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
