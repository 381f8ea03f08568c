use crate::domain::property_label;
use crate::shared::components::ui::{Badge, Select};
use crate::shared::components::{FilterPanel, SearchInput};
use contracts::domain::a001_inventory_item::{kitchen_catalog, zones_catalog, InventoryItem};
use contracts::enums::ItemStatus;
use contracts::shared::categories::{category_map, category_options, CatalogKind};
use contracts::shared::filtering::{apply_filter, FilterSettings, WILDCARD};
use leptos::prelude::*;

/// Which inventory catalog the list renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InventoryScope {
    Zones,
    Kitchen,
}

impl InventoryScope {
    fn title(&self) -> &'static str {
        match self {
            InventoryScope::Zones => "Inventory · Zones",
            InventoryScope::Kitchen => "Inventory · Kitchen",
        }
    }

    fn catalog(&self) -> Vec<InventoryItem> {
        match self {
            InventoryScope::Zones => zones_catalog(),
            InventoryScope::Kitchen => kitchen_catalog(),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn InventoryList(scope: InventoryScope) -> impl IntoView {
    // Catalog is fixed for the lifetime of the view; only the filter is reactive.
    let catalog = StoredValue::new(scope.catalog());
    let total = catalog.with_value(|items| items.len());

    let (query, set_query) = signal(String::new());
    let (property_filter, set_property_filter) = signal(WILDCARD.to_string());
    let (category_filter, set_category_filter) = signal(WILDCARD.to_string());
    let (status_filter, set_status_filter) = signal(WILDCARD.to_string());
    let filter_expanded = RwSignal::new(true);

    let settings = Memo::new(move |_| FilterSettings {
        query: query.get(),
        property: property_filter.get(),
        category: category_filter.get(),
        status: status_filter.get(),
    });

    let rows = Memo::new(move |_| {
        let settings = settings.get();
        catalog.with_value(|items| {
            apply_filter(items, &settings, &category_map(CatalogKind::Inventory))
        })
    });

    let active_count = Signal::derive(move || settings.get().active_count());

    let status_options: Vec<(String, String)> =
        std::iter::once((WILDCARD.to_string(), "All statuses".to_string()))
            .chain(
                ItemStatus::all()
                    .into_iter()
                    .map(|s| (s.code().to_string(), s.code().to_string())),
            )
            .collect();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{scope.title()}</h1>
                </div>
            </div>

            <FilterPanel
                is_expanded=filter_expanded
                active_filters_count=active_count
                summary=move || view! {
                    <span class="filter-panel__summary">
                        {move || format!("{} of {} items", rows.get().len(), total)}
                    </span>
                }
                filter_content=move || view! {
                    <div class="filter-panel__row">
                        <SearchInput
                            value=query
                            on_change=Callback::new(move |v: String| set_query.set(v))
                            placeholder="Search by name, category or area..."
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
                            options=category_options(CatalogKind::Inventory)
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
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell">"Area"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Property"</th>
                            <th class="table__header-cell table__header-cell--right">"Qty"</th>
                            <th class="table__header-cell table__header-cell--right">"Price"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|item| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{item.name}</td>
                                    <td class="table__cell">{item.category}</td>
                                    <td class="table__cell">{item.area}</td>
                                    <td class="table__cell">
                                        <Badge variant=item.status.badge_variant()>
                                            {item.status.code()}
                                        </Badge>
                                    </td>
                                    <td class="table__cell">{property_label(&item.property)}</td>
                                    <td class="table__cell table__cell--right">{item.quantity}</td>
                                    <td class="table__cell table__cell--right">
                                        {format!("{:.2}", item.price)}
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
