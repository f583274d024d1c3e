use contracts::shared::validation::{validate_fields, FieldErrors};
use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, A};
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::shared::toast::use_toast;
use crate::system::auth::{api, context::{start_session, use_auth}};

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(FieldErrors::default());
    let (is_loading, set_is_loading) = signal(false);

    let (auth_state, set_auth_state) = use_auth();
    let toast = use_toast();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest {
            email: email.get().trim().to_string(),
            password: password.get(),
        };
        if let Err(errors) = validate_fields(&request) {
            field_errors.set(errors);
            return;
        }
        field_errors.set(FieldErrors::default());
        set_is_loading.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&request).await {
                Ok(response) => {
                    let home = response.user.role.home();
                    start_session(set_auth_state, response);
                    toast.success("Login realizado com sucesso");
                    navigate(home, Default::default());
                }
                Err(e) => {
                    log::info!("Login rejected: {}", e);
                    toast.error("E-mail ou senha inválidas!");
                }
            }
            set_is_loading.set(false);
        });
    };

    let field_error = move |field: &'static str| {
        move || {
            field_errors
                .with(|e| e.get(field).map(str::to_string))
                .map(|m| view! { <span class="form__error">{m}</span> })
        }
    };

    view! {
        {move || auth_state.get().user.map(|u| view! { <Redirect path=u.role.home() /> })}
        <div class="login-container">
            <Card class="login-box">
                <div class="login-box__header">
                    <h1>"Bem vindo(a) ao Freitas Gás"</h1>
                    <p>"Digite seu e-mail e senha abaixo para fazer login em sua conta"</p>
                </div>

                <form on:submit=on_submit>
                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input value=email placeholder="email" input_type=InputType::Email />
                        {field_error("email")}
                    </div>

                    <div class="form__group">
                        <Label>"Senha"</Label>
                        <Input value=password placeholder="senha" input_type=InputType::Password />
                        {field_error("password")}
                        <A href="/recovery-password" attr:class="login-box__link">
                            "Esqueci minha senha"
                        </A>
                    </div>

                    <Button
                        button_type=ButtonType::Submit
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || is_loading.get())
                        block=true
                    >
                        {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                    </Button>
                </form>
            </Card>
        </div>
    }
}
