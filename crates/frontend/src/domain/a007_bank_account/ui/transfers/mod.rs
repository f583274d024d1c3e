use chrono::NaiveDate;
use contracts::domain::a007_bank_account::aggregate::AccountTransfer;
use contracts::shared::pagination::PageRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a007_bank_account::api::{self, TransferQuery};
use crate::domain::a007_bank_account::ui::transfer_dialog::{TransferDialog, TransferTarget};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::date_input::DateRangeInput;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_cell_money::TableCellMoney;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_resource::ListResource;
use crate::shared::modal::use_modal;
use crate::shared::toast::use_toast;

/// "Transferências entre contas" panel of the finance screen
#[component]
pub fn TransfersPanel(
    #[prop(into)] refresh: Signal<u32>,
    on_changed: Callback<()>,
) -> impl IntoView {
    let query = RwSignal::new(TransferQuery::default());
    let start_date = RwSignal::new(None::<NaiveDate>);
    let end_date = RwSignal::new(None::<NaiveDate>);
    let transfers = ListResource::<AccountTransfer>::new();
    let transfer_modal = use_modal();
    let transfer_target = RwSignal::new(None::<TransferTarget>);
    let delete_modal = use_modal();
    let delete_target = RwSignal::new(None::<String>);
    let (deleting, set_deleting) = signal(false);
    let toast = use_toast();

    // a new range restarts from page 1
    Effect::new(move |_| {
        let start = start_date.get();
        let end = end_date.get();
        query.maybe_update(|q| {
            let changed = q.start_date != start || q.end_date != end;
            if changed {
                q.start_date = start;
                q.end_date = end;
                q.page = PageRequest::first(q.page.items_per_page);
            }
            changed
        });
    });

    Effect::new(move |_| {
        refresh.track();
        let query = query.get();
        transfers.load(move || api::fetch_transfers(query));
    });

    let open_transfer = move |t: TransferTarget| {
        transfer_target.set(Some(t));
        transfer_modal.show();
    };

    let on_delete = Callback::new(move |_| {
        let Some(id) = delete_target.get_untracked() else {
            return;
        };
        set_deleting.set(true);
        spawn_local(async move {
            match api::delete_transfer(&id).await {
                Ok(()) => {
                    toast.success("Transferência excluída com sucesso");
                    delete_modal.hide();
                    delete_target.set(None);
                    on_changed.run(());
                }
                Err(e) => toast.error(e.to_string()),
            }
            set_deleting.set(false);
        });
    });

    view! {
        <section class="finance__section">
            <div class="finance__section-header">
                <h2 class="finance__section-title">"Transferências entre contas"</h2>
                <Flex gap=FlexGap::Small>
                    <DateRangeInput start=start_date end=end_date />
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| open_transfer(TransferTarget::New)>
                        {icon("transfer")}
                        " Transferir"
                    </Button>
                </Flex>
            </div>
            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Conta de origem"</TableHeaderCell>
                            <TableHeaderCell>"Conta de destino"</TableHeaderCell>
                            <TableHeaderCell>"Valor"</TableHeaderCell>
                            <TableHeaderCell>"Data"</TableHeaderCell>
                            <TableHeaderCell>"Ações"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || transfers.items.get()
                            key=|t| (t.id.clone(), t.value, t.origin_account_id.clone(), t.destination_account_id.clone())
                            children=move |t: AccountTransfer| {
                                let id = t.id.clone();
                                let row = t.clone();
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{t.origin_account.bank.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{t.destination_account.bank.clone()}</TableCellLayout></TableCell>
                                        <TableCellMoney value=t.value />
                                        <TableCell><TableCellLayout>{format_datetime(&t.created_at)}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Flex gap=FlexGap::Small>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| open_transfer(TransferTarget::Edit(row.clone()))
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| {
                                                            delete_target.set(Some(id.clone()));
                                                            delete_modal.show();
                                                        }
                                                    >
                                                        {icon("delete")}
                                                    </Button>
                                                </Flex>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
                {move || (!transfers.loading.get() && transfers.is_empty()).then(|| view! {
                    <div class="table__empty">"Nenhuma transferência encontrada."</div>
                })}
            </div>
            <PaginationControls
                page=Signal::derive(move || query.with(|q| q.page))
                fetched=Signal::derive(move || transfers.len())
                on_page_change=Callback::new(move |p| query.update(|q| q.page = p))
                disabled=Signal::derive(move || transfers.loading.get())
            />

            <TransferDialog modal=transfer_modal target=transfer_target on_saved=on_changed />
            <ConfirmDialog
                modal=delete_modal
                title="Excluir transferência"
                message="Você tem certeza que deseja excluir esta transferência?"
                busy=deleting
                on_confirm=on_delete
            />
        </section>
    }
}
