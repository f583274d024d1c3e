use crate::shared::modal::ModalController;
use leptos::prelude::*;
use thaw::*;

/// Yes/no dialog for irreversible actions
#[component]
pub fn ConfirmDialog(
    modal: ModalController,
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    #[prop(into, optional)] busy: Signal<bool>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Dialog open=modal.open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>
                        <p>{move || message.get()}</p>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| modal.hide()
                            disabled=busy
                        >
                            "Cancelar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_confirm.run(())
                            disabled=busy
                        >
                            {move || if busy.get() { "Aguarde..." } else { "Confirmar" }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
