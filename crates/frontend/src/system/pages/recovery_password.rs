use contracts::shared::validation::validate_fields;
use contracts::system::auth::RecoveryPasswordRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::shared::toast::use_toast;
use crate::system::auth::api;

#[component]
pub fn RecoveryPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let (sending, set_sending) = signal(false);
    let toast = use_toast();

    let on_send = move |_| {
        let request = RecoveryPasswordRequest {
            email: email.get().trim().to_string(),
        };
        if let Err(errors) = validate_fields(&request) {
            toast.error(errors.first().unwrap_or("Insira um email válido").to_string());
            return;
        }
        set_sending.set(true);
        spawn_local(async move {
            match api::recover_password(&request).await {
                Ok(()) => toast.success("Código enviado como sucesso"),
                Err(e) => toast.error(e.to_string()),
            }
            set_sending.set(false);
        });
    };

    view! {
        <div class="login-container">
            <Card class="login-box">
                <div class="login-box__header">
                    <h1>"Recuperação de senha"</h1>
                    <p>"Entre com seu email para receber o código."</p>
                </div>
                <div class="form__group">
                    <Label>"Email"</Label>
                    <Input value=email placeholder="m@example.com" input_type=InputType::Email />
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_send
                    disabled=Signal::derive(move || sending.get())
                    block=true
                >
                    "Receber código"
                </Button>
                <A href="/login" attr:class="login-box__link">"Voltar para o login"</A>
            </Card>
        </div>
    }
}
