mod state;

use contracts::domain::a001_customer::aggregate::{format_phone, Customer, CustomerForm};
use contracts::shared::validation::{validate_fields, FieldErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::domain::a001_customer::api;
use crate::domain::a001_customer::ui::form::CustomerFields;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_cell_money::TableCellMoney;
use crate::shared::icons::icon;
use crate::shared::list_resource::ListResource;
use crate::shared::modal::{use_modal, ModalController};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::http::ApiError;
use crate::shared::toast::{use_toast, ToastKind};
use state::create_state;

#[component]
pub fn CustomersListPage() -> impl IntoView {
    let state = create_state();
    let customers = ListResource::<Customer>::new();
    let create_modal = use_modal();

    Effect::new(move |_| {
        let page = state.with(|s| s.page);
        customers.load(move || api::fetch_page(page));
    });

    let reload = move || {
        let page = state.with_untracked(|s| s.page);
        customers.load(move || api::fetch_page(page));
    };

    let page_signal = Signal::derive(move || state.with(|s| s.page));
    let fetched = Signal::derive(move || customers.len());

    view! {
        <PageFrame page_id="a001_customer--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Clientes"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| create_modal.show()>
                        {icon("plus")}
                        " Cadastrar Cliente"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || customers.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Nome"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Telefone"</TableHeaderCell>
                                <TableHeaderCell>"Rua"</TableHeaderCell>
                                <TableHeaderCell>"Número"</TableHeaderCell>
                                <TableHeaderCell>"Bairro"</TableHeaderCell>
                                <TableHeaderCell>"Cidade"</TableHeaderCell>
                                <TableHeaderCell>"Estado"</TableHeaderCell>
                                <TableHeaderCell>"Saldo de crédito"</TableHeaderCell>
                                <TableHeaderCell>"Ações"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || customers.items.get()
                                key=|c| c.id.clone()
                                children=move |c: Customer| {
                                    let href = format!("/app/customers/{}", c.id);
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{c.name.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{c.email.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_phone(&c.phone)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{c.street.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{c.number.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{c.district.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{c.city.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{c.state.clone()}</TableCellLayout></TableCell>
                                            <TableCellMoney value=c.credit_balance />
                                            <TableCell>
                                                <TableCellLayout>
                                                    <A href=href attr:class="table__link">
                                                        {icon("edit")}
                                                        " Editar"
                                                    </A>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || customers.loading.get().then(|| view! {
                        <div class="table__empty"><Spinner /> " Carregando..."</div>
                    })}
                    {move || (!customers.loading.get() && customers.is_empty()).then(|| view! {
                        <div class="table__empty">"Nenhum cliente encontrado."</div>
                    })}
                </div>

                <PaginationControls
                    page=page_signal
                    fetched=fetched
                    on_page_change=Callback::new(move |p| state.update(|s| s.page = p))
                    disabled=Signal::derive(move || customers.loading.get())
                />
            </div>

            <CreateCustomerDialog modal=create_modal on_saved=Callback::new(move |_| reload()) />
        </PageFrame>
    }
}

/// What the create dialog does once the server answers
#[derive(Debug, Clone, PartialEq, Eq)]
struct CreateOutcome {
    toast: (ToastKind, String),
    /// Clears the form and closes the dialog
    reset_form: bool,
    reload: bool,
}

fn create_outcome(result: Result<(), ApiError>) -> CreateOutcome {
    match result {
        Ok(()) => CreateOutcome {
            toast: (ToastKind::Success, "Cliente cadastrado com sucesso".to_string()),
            reset_form: true,
            reload: true,
        },
        Err(e) => CreateOutcome {
            toast: (ToastKind::Error, e.to_string()),
            reset_form: false,
            reload: false,
        },
    }
}

/// Keeps the typed values when the request fails
#[component]
fn CreateCustomerDialog(modal: ModalController, on_saved: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(CustomerForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let (saving, set_saving) = signal(false);
    let toast = use_toast();

    let on_save = move |_| {
        let current = form.get().trimmed();
        if let Err(e) = validate_fields(&current) {
            errors.set(e);
            return;
        }
        errors.set(FieldErrors::default());
        set_saving.set(true);
        let request = current.to_create_request();
        spawn_local(async move {
            let outcome = create_outcome(api::create(&request).await);
            let (kind, text) = outcome.toast;
            toast.push(kind, text);
            if outcome.reset_form {
                form.set(CustomerForm::default());
                modal.hide();
            }
            if outcome.reload {
                on_saved.run(());
            }
            set_saving.set(false);
        });
    };

    view! {
        <Dialog open=modal.open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Cadastrar Novo Cliente"</DialogTitle>
                    <DialogContent>
                        <CustomerFields form=form errors=errors />
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
                            {move || if saving.get() { "Salvando..." } else { "Salvar" }}
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
    use crate::shared::http::error_from_body;

    #[test]
    fn test_successful_create_resets_and_reloads() {
        let outcome = create_outcome(Ok(()));
        assert_eq!(
            outcome.toast,
            (ToastKind::Success, "Cliente cadastrado com sucesso".to_string())
        );
        assert!(outcome.reset_form);
        assert!(outcome.reload);
    }

    #[test]
    fn test_rejected_create_keeps_fields_and_shows_server_message() {
        let err = error_from_body(400, r#"{"error":"E-mail já cadastrado"}"#);
        let outcome = create_outcome(Err(err));
        assert_eq!(outcome.toast, (ToastKind::Error, "E-mail já cadastrado".to_string()));
        assert!(!outcome.reset_form);
        assert!(!outcome.reload);
    }
}
