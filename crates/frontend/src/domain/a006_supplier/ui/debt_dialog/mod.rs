use chrono::NaiveDate;
use contracts::domain::a005_debt::aggregate::{Debt, DebtForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_debt::api;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::money_input::MoneyInput;
use crate::shared::modal::ModalController;
use crate::shared::toast::use_toast;

/// Create a debt for a supplier, or edit an existing one
#[derive(Debug, Clone, PartialEq)]
pub enum DebtTarget {
    New { supplier_id: String },
    Edit(Debt),
}

impl DebtTarget {
    fn title(&self) -> &'static str {
        match self {
            DebtTarget::New { .. } => "Cadastrar Novo Débito",
            DebtTarget::Edit(_) => "Editar Débito",
        }
    }

    fn initial_form(&self) -> DebtForm {
        match self {
            DebtTarget::New { .. } => DebtForm::default(),
            DebtTarget::Edit(debt) => debt.to_form(),
        }
    }
}

#[component]
pub fn DebtDialog(
    modal: ModalController,
    target: RwSignal<Option<DebtTarget>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let amount = RwSignal::new(0_i64);
    let due_date = RwSignal::new(None::<NaiveDate>);
    let paid = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let (saving, set_saving) = signal(false);
    let toast = use_toast();

    Effect::new(move |_| {
        if let Some(t) = target.get() {
            let form = t.initial_form();
            amount.set(form.amount);
            due_date.set(form.due_date);
            paid.set(form.paid);
            error.set(None);
        }
    });

    let on_save = move |_| {
        let Some(current) = target.get_untracked() else {
            return;
        };
        let form = DebtForm {
            amount: amount.get_untracked(),
            due_date: due_date.get_untracked(),
            paid: paid.get_untracked(),
        };
        set_saving.set(true);
        spawn_local(async move {
            let result = match &current {
                DebtTarget::New { supplier_id } => match form.to_create_request(supplier_id) {
                    Ok(req) => api::create_debt(&req).await.map_err(|e| e.to_string()),
                    Err(e) => Err(e.to_string()),
                },
                DebtTarget::Edit(debt) => match form.to_update_request() {
                    Ok(req) => api::update_debt(&debt.id, &req).await.map_err(|e| e.to_string()),
                    Err(e) => Err(e.to_string()),
                },
            };
            match result {
                Ok(()) => {
                    toast.success(match current {
                        DebtTarget::New { .. } => "Débito cadastrado com sucesso",
                        DebtTarget::Edit(_) => "Débito atualizado com sucesso",
                    });
                    modal.hide();
                    target.set(None);
                    on_saved.run(());
                }
                Err(message) => error.set(Some(message)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <Dialog open=modal.open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || target.with(|t| t.as_ref().map(DebtTarget::title).unwrap_or_default())}
                    </DialogTitle>
                    <DialogContent>
                        <div class="form__group">
                            <Label>"Valor"</Label>
                            <MoneyInput value=amount />
                        </div>
                        <div class="form__group">
                            <Label>"Data de Vencimento"</Label>
                            <DateInput value=due_date />
                        </div>
                        <div class="form__group">
                            <Checkbox checked=paid label="Pago" />
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
    fn test_edit_prefills_from_debt() {
        let debt: Debt = serde_json::from_str(
            r#"{"id":"d1","amount":120000,"dueDate":"2024-05-10T00:00:00.000Z","paid":true}"#,
        )
        .unwrap();
        let target = DebtTarget::Edit(debt);
        assert_eq!(target.title(), "Editar Débito");
        let form = target.initial_form();
        assert_eq!(form.amount, 120000);
        assert_eq!(form.due_date, NaiveDate::from_ymd_opt(2024, 5, 10));
        assert!(form.paid);
    }

    #[test]
    fn test_new_starts_blank() {
        let target = DebtTarget::New { supplier_id: "s1".into() };
        assert_eq!(target.initial_form(), DebtForm::default());
    }
}
