//! Sidebar built from the signed-in role's menu

use contracts::system::routes::AppRoute;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session_user;

/// True when `pathname` is the item's page or one of its detail pages
fn is_active(route: AppRoute, pathname: &str) -> bool {
    let base = route.path();
    pathname == base || pathname.starts_with(&format!("{}/", base))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let user = use_session_user();
    let location = use_location();
    let ctx = use_global_context();

    let items = move || user.get().map(|u| u.role.menu()).unwrap_or_default();

    let on_navigate = move |_| {
        let narrow = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
            .map(|w| w < 768.0)
            .unwrap_or(false);
        if narrow {
            ctx.close_left();
        }
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">
                {icon("sales")}
                <span>"Freitas Gás"</span>
            </div>
            <ul class="sidebar__menu">
                <For
                    each=items
                    key=|route| route.path()
                    children=move |route: AppRoute| {
                        let active = move || is_active(route, &location.pathname.get());
                        view! {
                            <li class="sidebar__item" class:sidebar__item--active=active>
                                <A href=route.path() on:click=on_navigate>
                                    {icon(route.icon())}
                                    <span class="sidebar__label">{route.title()}</span>
                                </A>
                            </li>
                        }
                    }
                />
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_matches_detail_pages() {
        assert!(is_active(AppRoute::Customers, "/app/customers"));
        assert!(is_active(AppRoute::Customers, "/app/customers/42"));
        assert!(!is_active(AppRoute::Customers, "/app/customers-old"));
        assert!(!is_active(AppRoute::Sales, "/app/customers"));
    }
}
