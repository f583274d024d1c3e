use contracts::system::routes::{resolve_access, RouteAccess};
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use thaw::*;

use super::context::use_auth;

/// Renders children only when the signed-in role may open the current path.
///
/// Anonymous visitors go to `/login`; a role outside its allowed set goes to
/// its home screen. Nothing of the guarded page renders before the decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Gate {
    Pending,
    Anonymous,
    Open,
    Redirect(&'static str),
}

#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let location = use_location();

    // Memoized so moving between allowed paths keeps the shell mounted
    let gate = Memo::new(move |_| {
        let state = auth_state.get();
        if !state.ready {
            return Gate::Pending;
        }
        let Some(user) = state.user else {
            return Gate::Anonymous;
        };
        match resolve_access(user.role, &location.pathname.get()) {
            RouteAccess::Allow(_) => Gate::Open,
            RouteAccess::Redirect(target) => Gate::Redirect(target),
        }
    });

    move || match gate.get() {
        Gate::Pending => view! {
            <div class="page page--loading">
                <Spinner />
            </div>
        }
        .into_any(),
        Gate::Anonymous => view! { <Redirect path="/login" /> }.into_any(),
        Gate::Open => children().into_any(),
        Gate::Redirect(target) => view! { <Redirect path=target /> }.into_any(),
    }
}
