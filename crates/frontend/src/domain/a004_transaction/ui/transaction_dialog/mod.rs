use contracts::domain::a004_transaction::aggregate::{TransactionForm, TransactionKind};
use contracts::enums::TransactionCategory;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_transaction::api;
use crate::shared::components::money_input::MoneyInput;
use crate::shared::components::option_select::OptionSelect;
use crate::shared::modal::ModalController;
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_session_user;

/// A typed name for a new category replaces the picked type
fn category_name(picked: &str, typed: &str) -> String {
    if typed.trim().is_empty() {
        picked.to_string()
    } else {
        typed.trim().to_string()
    }
}

fn kind_options(kinds: &[TransactionKind]) -> Vec<(String, String)> {
    kinds
        .iter()
        .map(|k| (k.name.clone(), k.name.clone()))
        .collect()
}

/// Manual income or withdrawal on the finance screen
#[component]
pub fn TransactionDialog(modal: ModalController, on_saved: Callback<()>) -> impl IntoView {
    let category = RwSignal::new(String::new());
    let kind = RwSignal::new(String::new());
    let new_category = RwSignal::new(String::new());
    let amount = RwSignal::new(0_i64);
    let description = RwSignal::new(String::new());
    let kinds = RwSignal::new(Vec::<TransactionKind>::new());
    let error = RwSignal::new(None::<String>);
    let (saving, set_saving) = signal(false);
    let toast = use_toast();
    let user = use_session_user();

    Effect::new(move |_| {
        if modal.open.get() {
            category.set(String::new());
            kind.set(String::new());
            new_category.set(String::new());
            amount.set(0);
            description.set(String::new());
            error.set(None);
        }
    });

    // types depend on the direction picked
    Effect::new(move |_| {
        let picked = TransactionCategory::from_code(&category.get());
        kind.set(String::new());
        kinds.set(Vec::new());
        let Some(picked) = picked else {
            return;
        };
        spawn_local(async move {
            let result = match picked {
                TransactionCategory::Income => api::fetch_income_types().await,
                _ => api::fetch_expense_types().await,
            };
            match result {
                Ok(list) => kinds.set(list),
                Err(e) => toast.error(e.to_string()),
            }
        });
    });

    let on_save = move |_| {
        let Some(session_user) = user.get_untracked() else {
            return;
        };
        let form = TransactionForm {
            category: TransactionCategory::from_code(&category.get_untracked()),
            custom_category: category_name(&kind.get_untracked(), &new_category.get_untracked()),
            description: description.get_untracked(),
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
            match api::create_transaction(&request).await {
                Ok(()) => {
                    toast.success("Transação cadastrada com sucesso");
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
                    <DialogTitle>"Cadastrar nova transação"</DialogTitle>
                    <DialogContent>
                        <div class="form__group">
                            <Label>"Categoria"</Label>
                            <OptionSelect
                                value=category
                                options=Signal::derive(|| {
                                    TransactionForm::categories()
                                        .into_iter()
                                        .map(|c| (c.code().to_string(), c.display_name().to_string()))
                                        .collect::<Vec<_>>()
                                })
                                placeholder="Selecione a categoria"
                            />
                        </div>
                        <div class="form__group">
                            <Label>"Tipo de movimentação"</Label>
                            <OptionSelect
                                value=kind
                                options=Signal::derive(move || kinds.with(|k| kind_options(k)))
                                placeholder="Selecione o tipo"
                                disabled=Signal::derive(move || category.with(String::is_empty))
                            />
                        </div>
                        <div class="form__group">
                            <Label>"Nome da nova categoria"</Label>
                            <Input value=new_category placeholder="Opcional" />
                        </div>
                        <div class="form__group">
                            <Label>"Valor"</Label>
                            <MoneyInput value=amount />
                        </div>
                        <div class="form__group">
                            <Label>"Descrição da transação"</Label>
                            <Input value=description />
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
                            "Cadastrar"
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
    fn test_typed_category_replaces_pick() {
        assert_eq!(category_name("Aporte", ""), "Aporte");
        assert_eq!(category_name("Aporte", "  Empréstimo "), "Empréstimo");
    }
}
