use crate::domain::property_label;
use crate::shared::components::ui::Select;
use crate::shared::components::{FilterPanel, SearchInput};
use crate::shared::date_utils::{format_date, format_duration};
use contracts::domain::a003_content_asset::content_catalog;
use contracts::enums::ContentKind;
use contracts::shared::categories::{category_map, category_options, CatalogKind};
use contracts::shared::filtering::{apply_filter, FilterSettings, WILDCARD};
use leptos::prelude::*;

/// Media library for the signage playlists.
#[component]
#[allow(non_snake_case)]
pub fn ContentList() -> impl IntoView {
    let catalog = StoredValue::new(content_catalog());
    let total = catalog.with_value(|items| items.len());

    let (query, set_query) = signal(String::new());
    let (property_filter, set_property_filter) = signal(WILDCARD.to_string());
    let (category_filter, set_category_filter) = signal(WILDCARD.to_string());
    let filter_expanded = RwSignal::new(true);

    let settings = Memo::new(move |_| FilterSettings {
        query: query.get(),
        property: property_filter.get(),
        category: category_filter.get(),
        status: WILDCARD.to_string(),
    });

    let rows = Memo::new(move |_| {
        let settings = settings.get();
        catalog.with_value(|items| {
            apply_filter(items, &settings, &category_map(CatalogKind::Content))
        })
    });

    let active_count = Signal::derive(move || settings.get().active_count());

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Content"</h1>
                </div>
            </div>

            <FilterPanel
                is_expanded=filter_expanded
                active_filters_count=active_count
                summary=move || view! {
                    <span class="filter-panel__summary">
                        {move || format!("{} of {} assets", rows.get().len(), total)}
                    </span>
                }
                filter_content=move || view! {
                    <div class="filter-panel__row">
                        <SearchInput
                            value=query
                            on_change=Callback::new(move |v: String| set_query.set(v))
                            placeholder="Search by title or category..."
                        />
                        <Select
                            label="Property"
                            value=property_filter
                            on_change=Callback::new(move |v: String| set_property_filter.set(v))
                            options=contracts::enums::Property::options()
                        />
                        <Select
                            label="Category"
                            value=category_filter
                            on_change=Callback::new(move |v: String| set_category_filter.set(v))
                            options=category_options(CatalogKind::Content)
                        />
                    </div>
                }
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Title"</th>
                            <th class="table__header-cell">"Kind"</th>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell">"Property"</th>
                            <th class="table__header-cell table__header-cell--right">"Duration"</th>
                            <th class="table__header-cell table__header-cell--right">"Size"</th>
                            <th class="table__header-cell">"Uploaded"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|asset| {
                            let duration = match asset.kind {
                                ContentKind::Video => format_duration(asset.duration_secs),
                                ContentKind::Image => "-".to_string(),
                            };
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{asset.title}</td>
                                    <td class="table__cell">{asset.kind.code()}</td>
                                    <td class="table__cell">{asset.category}</td>
                                    <td class="table__cell">{property_label(&asset.property)}</td>
                                    <td class="table__cell table__cell--right">{duration}</td>
                                    <td class="table__cell table__cell--right">
                                        {format!("{:.1} MB", asset.size_mb)}
                                    </td>
                                    <td class="table__cell">{format_date(asset.uploaded_at)}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
