use chrono::NaiveDate;
use contracts::domain::a004_transaction::aggregate::{Transaction, UpdateTransactionDate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_transaction::api;
use crate::shared::components::date_input::DateInput;
use crate::shared::date_utils::parse_input_date;
use crate::shared::http::ApiError;
use crate::shared::modal::ModalController;
use crate::shared::toast::use_toast;

fn failure_message(err: ApiError) -> String {
    match err {
        ApiError::Http { message, .. } => message,
        _ => "Erro ao atualizar a movimentação.".to_string(),
    }
}

/// Moves a ledger entry to another day
#[component]
pub fn UpdateDateDialog(
    modal: ModalController,
    target: RwSignal<Option<Transaction>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let date = RwSignal::new(None::<NaiveDate>);
    let (saving, set_saving) = signal(false);
    let toast = use_toast();

    Effect::new(move |_| {
        let current = target.get();
        date.set(current.and_then(|t| parse_input_date(t.created_at.get(..10).unwrap_or(""))));
    });

    let on_save = move |_| {
        let Some(transaction) = target.get_untracked() else {
            return;
        };
        let request = match (UpdateTransactionDate { date: date.get_untracked() }).to_request(&transaction) {
            Ok(r) => r,
            Err(e) => {
                toast.error(e.to_string());
                return;
            }
        };
        set_saving.set(true);
        spawn_local(async move {
            match api::update_transaction(&transaction.id, &request).await {
                Ok(()) => {
                    toast.success("Movimentação editada com sucesso.");
                    modal.hide();
                    target.set(None);
                    on_saved.run(());
                }
                Err(e) => toast.error(failure_message(e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <Dialog open=modal.open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Atualizar data da movimentação"</DialogTitle>
                    <DialogContent>
                        <div class="form__group">
                            <Label>"Escolha uma data"</Label>
                            <DateInput value=date />
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
    fn test_server_message_wins_over_fallback() {
        let http = ApiError::Http { status: 400, message: "Data inválida".into() };
        assert_eq!(failure_message(http), "Data inválida");
        assert_eq!(
            failure_message(ApiError::Network("offline".into())),
            "Erro ao atualizar a movimentação."
        );
    }
}
