use contracts::domain::a004_transaction::aggregate::CashBalance;
use contracts::shared::pagination::PageRequest;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_transaction::api::{self, DEPOSITS_PER_PAGE};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_cell_money::TableCellMoney;
use crate::shared::list_resource::ListResource;

/// Cash each deliveryman still holds
#[component]
pub fn CashBalancesPanel(#[prop(into)] refresh: Signal<u32>) -> impl IntoView {
    let page = RwSignal::new(PageRequest::first(DEPOSITS_PER_PAGE));
    let balances = ListResource::<CashBalance>::new();

    Effect::new(move |_| {
        refresh.track();
        let page = page.get();
        balances.load(move || api::fetch_cash_balances(page));
    });

    view! {
        <section class="finance__section">
            <h2 class="finance__section-title">"Saldo dos entregadores"</h2>
            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Entregador"</TableHeaderCell>
                            <TableHeaderCell>"Saldo"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || balances.items.get()
                            key=|b| b.id.clone()
                            children=move |b: CashBalance| view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{b.name}</TableCellLayout></TableCell>
                                    <TableCellMoney value=b.cash_balance color_by_sign=true />
                                </TableRow>
                            }
                        />
                    </TableBody>
                </Table>
                {move || (!balances.loading.get() && balances.is_empty()).then(|| view! {
                    <div class="table__empty">"Nenhum entregador com saldo."</div>
                })}
            </div>
            <PaginationControls
                page=page
                fetched=Signal::derive(move || balances.len())
                on_page_change=Callback::new(move |p| page.set(p))
                disabled=Signal::derive(move || balances.loading.get())
            />
        </section>
    }
}
