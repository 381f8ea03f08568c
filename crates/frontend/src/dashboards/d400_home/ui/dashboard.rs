use crate::shared::components::StatCard;
use contracts::dashboards::d400_home_summary::home_summary;
use leptos::prelude::*;

/// Home dashboard: one static snapshot of business statistics rendered
/// as a card grid. The snapshot is taken once when the page mounts.
#[component]
pub fn HomeDashboard() -> impl IntoView {
    let cards = home_summary();

    view! {
        <div id="d400_home--dashboard" class="page page--dashboard" data-page-category="dashboard">
            <div class="page__header">
                <h2 class="page__title">"Home"</h2>
            </div>

            <div class="stat-card-grid">
                {cards.into_iter().map(|(meta, value)| {
                    let status = value.status;
                    let amount = value.value;
                    let change = value.change_percent;
                    let subtitle = value.subtitle;
                    view! {
                        <StatCard
                            label=meta.label
                            icon_name=meta.icon
                            value=Signal::derive(move || amount)
                            format=meta.format.clone()
                            status=Signal::derive(move || status)
                            change_percent=Signal::derive(move || change)
                            subtitle=Signal::derive({
                                let subtitle = subtitle.clone();
                                move || subtitle.clone()
                            })
                        />
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
