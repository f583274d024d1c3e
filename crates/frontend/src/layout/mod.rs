pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use top_header::TopHeader;

/// Authenticated application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |          Outlet               |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <left::Left>
                    <left::sidebar::Sidebar />
                </left::Left>
                <div class="app-main">
                    <Outlet />
                </div>
            </div>
        </div>
    }
}
