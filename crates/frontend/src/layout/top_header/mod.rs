//! Top bar: sidebar toggle, brand, notifications shortcut and the session user.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::system::auth::context::{end_session, use_auth};

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let logout = move |_| {
        end_session(set_auth_state);
        navigate("/login", Default::default());
    };

    let is_admin = move || auth_state.with(|s| s.user.as_ref().is_some_and(|u| u.is_admin()));

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Ocultar menu" } else { "Mostrar menu" }
                >
                    {icon("chevron-left")}
                </button>
                <span class="top-header__title">"Freitas Gás"</span>
            </div>

            <div class="top-header__actions">
                <Show when=is_admin>
                    <A href="/app/notifications" attr:class="top-header__icon-btn" attr:title="Notificações">
                        {icon("bell")}
                    </A>
                </Show>

                <A href="/app/profile" attr:class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth_state.get().user
                            .map(|u| u.name)
                            .unwrap_or_default()}
                    </span>
                </A>

                <button class="top-header__icon-btn" on:click=logout title="Sair">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
