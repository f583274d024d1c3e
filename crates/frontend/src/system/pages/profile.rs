use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::{end_session, use_auth};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let logout = move |_| {
        end_session(set_auth_state);
        navigate("/login", Default::default());
    };

    view! {
        <PageFrame page_id="sys_profile--detail" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Perfil"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=logout>
                        {icon("logout")}
                        " Sair"
                    </Button>
                </div>
            </div>
            <div class="page__content">
                {move || auth_state.get().user.map(|user| view! {
                    <Card>
                        <div class="profile">
                            <div class="profile__row">
                                <span class="profile__label">"Nome"</span>
                                <span>{user.name.clone()}</span>
                            </div>
                            <div class="profile__row">
                                <span class="profile__label">"Email"</span>
                                <span>{user.email.clone()}</span>
                            </div>
                            <div class="profile__row">
                                <span class="profile__label">"Perfil"</span>
                                <Badge>{user.role.display_name()}</Badge>
                            </div>
                        </div>
                    </Card>
                })}
            </div>
        </PageFrame>
    }
}
