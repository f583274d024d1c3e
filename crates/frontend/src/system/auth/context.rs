use contracts::enums::Role;
use contracts::system::auth::{LoginResponse, SessionUser};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user: Option<SessionUser>,
    /// False until the stored token has been checked
    pub ready: bool,
}

impl AuthState {
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Restore the session from localStorage on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let Some(access_token) = storage::get_access_token() else {
                set_auth_state.set(AuthState {
                    ready: true,
                    ..Default::default()
                });
                return;
            };
            match api::get_current_user(&access_token).await {
                Ok(user) => {
                    set_auth_state.set(AuthState {
                        access_token: Some(access_token),
                        user: Some(user),
                        ready: true,
                    });
                }
                Err(e) => {
                    log::info!("Stored session rejected: {}", e);
                    storage::clear_tokens();
                    set_auth_state.set(AuthState {
                        ready: true,
                        ..Default::default()
                    });
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    (
        expect_context::<ReadSignal<AuthState>>(),
        expect_context::<WriteSignal<AuthState>>(),
    )
}

/// Signed-in user. Screens behind the route guard can rely on it.
pub fn use_session_user() -> Signal<Option<SessionUser>> {
    let (auth_state, _) = use_auth();
    Signal::derive(move || auth_state.get().user)
}

/// Stores the token and publishes the user
pub fn start_session(set_auth_state: WriteSignal<AuthState>, response: LoginResponse) {
    storage::save_access_token(&response.access_token);
    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user: Some(response.user),
        ready: true,
    });
}

pub fn end_session(set_auth_state: WriteSignal<AuthState>) {
    if let Some(token) = storage::get_access_token() {
        spawn_local(async move {
            if let Err(e) = api::logout(&token).await {
                log::warn!("Logout request failed: {}", e);
            }
        });
    }
    storage::clear_tokens();
    set_auth_state.set(AuthState {
        ready: true,
        ..Default::default()
    });
}
