use chrono::NaiveDate;
use contracts::domain::a004_transaction::aggregate::DepositForm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_transaction::api;
use crate::shared::components::date_input::{DateInput, TimeInput};
use crate::shared::components::money_input::MoneyInput;
use crate::shared::date_utils::today;
use crate::shared::modal::ModalController;
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_session_user;

/// Cash handed to the company by the signed-in deliveryman
#[component]
pub fn DepositDialog(modal: ModalController, on_saved: Callback<()>) -> impl IntoView {
    let date = RwSignal::new(None::<NaiveDate>);
    let time = RwSignal::new(String::new());
    let bank = RwSignal::new(String::new());
    let amount = RwSignal::new(0_i64);
    let error = RwSignal::new(None::<String>);
    let (saving, set_saving) = signal(false);
    let toast = use_toast();
    let user = use_session_user();

    Effect::new(move |_| {
        if modal.open.get() {
            date.set(Some(today()));
            time.set(String::new());
            bank.set(String::new());
            amount.set(0);
            error.set(None);
        }
    });

    let on_save = move |_| {
        let Some(session_user) = user.get_untracked() else {
            return;
        };
        let form = DepositForm {
            date: date.get_untracked(),
            time: time.get_untracked(),
            bank: bank.get_untracked(),
            amount: amount.get_untracked(),
        };
        let request = match form.to_request(&session_user.id) {
            Ok(r) => r,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            match api::create_deposit(&request).await {
                Ok(()) => {
                    toast.success("Movimentação cadastrada com sucesso");
                    modal.hide();
                    on_saved.run(());
                }
                Err(e) => toast.error(e.to_string()),
            }
            set_saving.set(false);
        });
    };

    view! {
        <Dialog open=modal.open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Informar depósito para empresa"</DialogTitle>
                    <DialogContent>
                        <div class="form__group">
                            <Label>"Data do depósito"</Label>
                            <div class="form__row">
                                <DateInput value=date />
                                <TimeInput value=time />
                            </div>
                        </div>
                        <div class="form__group">
                            <Label>"Banco"</Label>
                            <Input value=bank placeholder="Opcional" />
                        </div>
                        <div class="form__group">
                            <Label>"Valor"</Label>
                            <MoneyInput value=amount />
                        </div>
                        {move || error.get().map(|m| view! { <span class="form__error">{m}</span> })}
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
                            "Registrar"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
