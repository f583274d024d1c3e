use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

use super::view_model::CustomerDetailsViewModel;
use crate::domain::a001_customer::ui::form::CustomerFields;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::icons::icon;
use crate::shared::modal::use_modal;
use crate::shared::money::format_brl;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::toast::use_toast;

const LIST_PATH: &str = "/app/customers";

#[component]
pub fn CustomerDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let vm = CustomerDetailsViewModel::new(use_toast());
    let delete_modal = use_modal();

    let customer_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    Effect::new(move |_| {
        let id = customer_id.get();
        if !id.is_empty() {
            vm.load(id);
        }
    });

    let back_to_list = {
        let navigate = navigate.clone();
        Callback::new(move |_: ()| navigate(LIST_PATH, Default::default()))
    };

    let title = move || {
        vm.customer
            .get()
            .map(|c| c.name)
            .unwrap_or_else(|| "Cliente".to_string())
    };

    view! {
        <PageFrame page_id="a001_customer--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| back_to_list.run(())
                    >
                        {icon("chevron-left")}
                        " Voltar"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || vm.load_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Card>
                    <div class="details-header">
                        <h3>"Informações"</h3>
                        <p>"Dados do cliente"</p>
                    </div>
                    <CustomerFields form=vm.form errors=vm.errors />
                    <div class="form__group">
                        <label class="form__label">"Saldo de crédito"</label>
                        <span class="form__readonly">
                            {move || vm.customer.get().map(|c| format_brl(c.credit_balance)).unwrap_or_default()}
                        </span>
                    </div>
                    <div class="details-actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| vm.save_command(customer_id.get_untracked(), back_to_list)
                            disabled=Signal::derive(move || vm.saving.get() || vm.customer.with(Option::is_none))
                        >
                            {move || if vm.saving.get() { "Salvando..." } else { "Salvar" }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| delete_modal.show()
                            disabled=Signal::derive(move || vm.customer.with(Option::is_none))
                        >
                            {icon("delete")}
                            " Deletar cliente"
                        </Button>
                    </div>
                </Card>
            </div>

            <ConfirmDialog
                modal=delete_modal
                title="Você tem certeza que deseja excluir o cliente?"
                message="Esta ação não pode ser desfeita. Isso excluirá permanentemente o cliente e removerá seus dados de nossos servidores."
                busy=Signal::derive(move || vm.deleting.get())
                on_confirm=Callback::new(move |_| {
                    delete_modal.hide();
                    vm.delete_command(customer_id.get_untracked(), back_to_list);
                })
            />
        </PageFrame>
    }
}
