use contracts::domain::a004_transaction::aggregate::{ExpenseForm, TransactionKind, OTHER_EXPENSE_TYPE};
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

/// Server types followed by the free-text option
fn expense_type_options(kinds: &[TransactionKind]) -> Vec<(String, String)> {
    kinds
        .iter()
        .map(|k| (k.name.clone(), k.name.clone()))
        .chain(std::iter::once((OTHER_EXPENSE_TYPE.to_string(), "Outros".to_string())))
        .collect()
}

#[component]
pub fn ExpenseDialog(modal: ModalController, on_saved: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(ExpenseForm::default());
    let category = RwSignal::new(TransactionCategory::Expense.code().to_string());
    let expense_type = RwSignal::new(String::new());
    let custom = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let amount = RwSignal::new(0_i64);
    let kinds = RwSignal::new(Vec::<TransactionKind>::new());
    let error = RwSignal::new(None::<String>);
    let (saving, set_saving) = signal(false);
    let toast = use_toast();
    let user = use_session_user();

    Effect::new(move |_| {
        if !modal.open.get() {
            return;
        }
        category.set(TransactionCategory::Expense.code().to_string());
        expense_type.set(String::new());
        custom.set(String::new());
        description.set(String::new());
        amount.set(0);
        error.set(None);
        spawn_local(async move {
            match api::fetch_expense_types().await {
                Ok(list) => kinds.set(list),
                Err(e) => toast.error(e.to_string()),
            }
        });
    });

    Effect::new(move |_| {
        let next = ExpenseForm {
            category: TransactionCategory::from_code(&category.get())
                .unwrap_or(TransactionCategory::Expense),
            expense_type: expense_type.get(),
            custom: custom.get(),
            description: description.get(),
            amount: amount.get(),
        };
        form.set(next);
    });

    let needs_custom = Signal::derive(move || form.with(ExpenseForm::needs_custom_text));

    let on_save = move |_| {
        let Some(session_user) = user.get_untracked() else {
            return;
        };
        let request = match form.with_untracked(|f| f.to_request(&session_user.id)) {
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
                    <DialogTitle>"Cadastrar Nova Transação"</DialogTitle>
                    <DialogContent>
                        <div class="form__group">
                            <Label>"Categoria"</Label>
                            <OptionSelect
                                value=category
                                options=Signal::derive(|| {
                                    ExpenseForm::categories()
                                        .into_iter()
                                        .map(|c| (c.code().to_string(), c.display_name().to_string()))
                                        .collect::<Vec<_>>()
                                })
                                placeholder="Selecione a categoria"
                            />
                        </div>
                        <div class="form__group">
                            <Label>"Tipo de transação"</Label>
                            <OptionSelect
                                value=expense_type
                                options=Signal::derive(move || kinds.with(|k| expense_type_options(k)))
                                placeholder="Selecione o tipo"
                            />
                        </div>
                        <div class="form__group">
                            <Label>"Valor"</Label>
                            <MoneyInput value=amount />
                        </div>
                        <Show when=move || needs_custom.get()>
                            <div class="form__group">
                                <Label>"Nome da categoria"</Label>
                                <Input value=custom />
                            </div>
                        </Show>
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
    fn test_other_option_is_last() {
        let kinds = vec![TransactionKind { id: "1".into(), name: "combustível".into() }];
        let options = expense_type_options(&kinds);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].0, "combustível");
        assert_eq!(options[1].0, OTHER_EXPENSE_TYPE);
    }
}
