use contracts::enums::Role;
use contracts::shared::validation::{validate_fields, FieldErrors};
use contracts::system::users::CreateUserRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::modal::ModalController;
use crate::shared::toast::use_toast;
use crate::system::users::api;

#[component]
pub fn CreateUserDialog(modal: ModalController, on_saved: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Deliveryman.code().to_string());
    let errors = RwSignal::new(FieldErrors::default());
    let (saving, set_saving) = signal(false);
    let toast = use_toast();

    let reset = move || {
        name.set(String::new());
        email.set(String::new());
        password.set(String::new());
        role.set(Role::Deliveryman.code().to_string());
        errors.set(FieldErrors::default());
    };

    let on_save = move |_| {
        let request = CreateUserRequest {
            name: name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            password: password.get(),
            role: Role::from_code(&role.get()).unwrap_or(Role::Deliveryman),
        };
        if let Err(e) = validate_fields(&request) {
            errors.set(e);
            return;
        }
        errors.set(FieldErrors::default());
        set_saving.set(true);
        spawn_local(async move {
            match api::create_user(&request).await {
                Ok(()) => {
                    toast.success("Usuário cadastrado com sucesso");
                    reset();
                    modal.hide();
                    on_saved.run(());
                }
                Err(e) => toast.error(e.to_string()),
            }
            set_saving.set(false);
        });
    };

    let field_error = move |field: &'static str| {
        move || {
            errors
                .with(|e| e.get(field).map(str::to_string))
                .map(|m| view! { <span class="form__error">{m}</span> })
        }
    };

    view! {
        <Dialog open=modal.open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Cadastrar usuário"</DialogTitle>
                    <DialogContent>
                        <div class="form__group">
                            <Label>"Nome"</Label>
                            <Input value=name />
                            {field_error("name")}
                        </div>
                        <div class="form__group">
                            <Label>"Email"</Label>
                            <Input value=email input_type=InputType::Email />
                            {field_error("email")}
                        </div>
                        <div class="form__group">
                            <Label>"Senha"</Label>
                            <Input value=password input_type=InputType::Password />
                            {field_error("password")}
                        </div>
                        <div class="form__group">
                            <Label>"Perfil"</Label>
                            <Select value=role>
                                <option value="DELIVERYMAN">"Entregador"</option>
                                <option value="ADMIN">"Administrador"</option>
                            </Select>
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| modal.hide()>
                            "Cancelar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=on_save
                            disabled=Signal::derive(move || saving.get())
                        >
                            {move || if saving.get() { "Salvando..." } else { "Cadastrar" }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
