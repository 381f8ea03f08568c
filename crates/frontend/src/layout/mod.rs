pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +---------------------------------+
/// |            TopHeader            |
/// +---------------------------------+
/// |  Sidebar  |      Content        |
/// |  (Left)   |   (tabbed Center)   |
/// +---------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    // Left component reads AppGlobalContext internally for visibility control

    view! {
        <div class="app-layout">
            // Top header with the sidebar toggle
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    <left::Sidebar />
                </left::Left>

                // Main content area: tab strip + tab pages
                <div class="app-main">
                    <center::Center>
                        <center::Tabs />
                    </center::Center>
                </div>
            </div>
        </div>
    }
}
