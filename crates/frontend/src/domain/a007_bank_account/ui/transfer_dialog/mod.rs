use contracts::domain::a007_bank_account::aggregate::{AccountTransfer, BankAccount, TransferForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a007_bank_account::api;
use crate::shared::components::money_input::MoneyInput;
use crate::shared::components::option_select::OptionSelect;
use crate::shared::modal::ModalController;
use crate::shared::toast::use_toast;

#[derive(Debug, Clone, PartialEq)]
pub enum TransferTarget {
    New,
    Edit(AccountTransfer),
}

impl TransferTarget {
    fn title(&self) -> &'static str {
        match self {
            TransferTarget::New => "Transferir entre contas",
            TransferTarget::Edit(_) => "Editar transferência",
        }
    }

    fn success_message(&self) -> &'static str {
        match self {
            TransferTarget::New => "Transferência realizada com sucesso",
            TransferTarget::Edit(_) => "Transferência atualizada com sucesso",
        }
    }
}

fn account_options(accounts: &[BankAccount]) -> Vec<(String, String)> {
    accounts
        .iter()
        .map(|a| (a.id.clone(), a.bank.clone()))
        .collect()
}

#[component]
pub fn TransferDialog(
    modal: ModalController,
    target: RwSignal<Option<TransferTarget>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let accounts = RwSignal::new(Vec::<BankAccount>::new());
    let origin = RwSignal::new(String::new());
    let destination = RwSignal::new(String::new());
    let value = RwSignal::new(0_i64);
    let error = RwSignal::new(None::<String>);
    let (saving, set_saving) = signal(false);
    let toast = use_toast();

    Effect::new(move |_| {
        let Some(t) = target.get() else {
            return;
        };
        let form = match &t {
            TransferTarget::New => TransferForm::default(),
            TransferTarget::Edit(transfer) => TransferForm::from_transfer(transfer),
        };
        origin.set(form.origin_account_id);
        destination.set(form.destination_account_id);
        value.set(form.value);
        error.set(None);
        spawn_local(async move {
            match api::fetch_accounts().await {
                Ok(list) => accounts.set(list),
                Err(e) => toast.error(e.to_string()),
            }
        });
    });

    let options = Signal::derive(move || accounts.with(|a| account_options(a)));

    let on_save = move |_| {
        let Some(current) = target.get_untracked() else {
            return;
        };
        let form = TransferForm {
            origin_account_id: origin.get_untracked(),
            destination_account_id: destination.get_untracked(),
            value: value.get_untracked(),
        };
        let request = match form.to_request() {
            Ok(r) => r,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            let result = match &current {
                TransferTarget::New => api::create_transfer(&request).await,
                TransferTarget::Edit(transfer) => api::update_transfer(&transfer.id, &request).await,
            };
            match result {
                Ok(()) => {
                    toast.success(current.success_message());
                    modal.hide();
                    target.set(None);
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
                    <DialogTitle>
                        {move || target.with(|t| t.as_ref().map(TransferTarget::title).unwrap_or_default())}
                    </DialogTitle>
                    <DialogContent>
                        <div class="form__group">
                            <Label>"Conta de origem"</Label>
                            <OptionSelect value=origin options=options placeholder="Selecione a conta" />
                        </div>
                        <div class="form__group">
                            <Label>"Conta de destino"</Label>
                            <OptionSelect value=destination options=options placeholder="Selecione a conta" />
                        </div>
                        <div class="form__group">
                            <Label>"Valor"</Label>
                            <MoneyInput value=value />
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
                            "Salvar"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_options_use_bank_name() {
        let accounts: Vec<BankAccount> = serde_json::from_str(
            r#"[{"id":"a1","bank":"Nubank","paymentsAssociated":["PIX"]},{"id":"a2","bank":"Caixa"}]"#,
        )
        .unwrap();
        assert_eq!(
            account_options(&accounts),
            vec![("a1".to_string(), "Nubank".to_string()), ("a2".to_string(), "Caixa".to_string())]
        );
    }
}
