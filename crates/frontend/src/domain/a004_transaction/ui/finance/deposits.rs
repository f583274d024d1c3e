use contracts::domain::a004_transaction::aggregate::Transaction;
use contracts::shared::pagination::PageRequest;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_transaction::api::{self, DEPOSITS_PER_PAGE};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_cell_money::TableCellMoney;
use crate::shared::date_utils::format_datetime;
use crate::shared::list_resource::ListResource;

#[component]
pub fn DepositsPanel(#[prop(into)] refresh: Signal<u32>) -> impl IntoView {
    let page = RwSignal::new(PageRequest::first(DEPOSITS_PER_PAGE));
    let deposits = ListResource::<Transaction>::new();

    Effect::new(move |_| {
        refresh.track();
        let page = page.get();
        deposits.load(move || api::fetch_deposits(page));
    });

    view! {
        <section class="finance__section">
            <h2 class="finance__section-title">"Depósitos"</h2>
            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Valor"</TableHeaderCell>
                            <TableHeaderCell>"Data"</TableHeaderCell>
                            <TableHeaderCell>"Entregador"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || deposits.items.get()
                            key=|t| t.id.clone()
                            children=move |t: Transaction| {
                                let who = t.user.as_ref().map(|u| u.name.clone()).unwrap_or_default();
                                view! {
                                    <TableRow>
                                        <TableCellMoney value=t.amount />
                                        <TableCell><TableCellLayout>{format_datetime(&t.created_at)}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{who}</TableCellLayout></TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
                {move || (!deposits.loading.get() && deposits.is_empty()).then(|| view! {
                    <div class="table__empty">"Nenhum depósito registrado."</div>
                })}
            </div>
            <PaginationControls
                page=page
                fetched=Signal::derive(move || deposits.len())
                on_page_change=Callback::new(move |p| page.set(p))
                disabled=Signal::derive(move || deposits.loading.get())
            />
        </section>
    }
}
