use contracts::domain::a006_supplier::aggregate::{with_open_debts, Supplier};
use contracts::shared::pagination::PageRequest;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a006_supplier::api::{self, SUPPLIERS_PER_PAGE};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_cell_money::TableCellMoney;
use crate::shared::list_resource::ListResource;

/// "Débitos a vencer" panel of the finance screen
#[component]
pub fn SupplierDebtsPanel(#[prop(into)] refresh: Signal<u32>) -> impl IntoView {
    let page = RwSignal::new(PageRequest::first(SUPPLIERS_PER_PAGE));
    let suppliers = ListResource::<Supplier>::new();

    Effect::new(move |_| {
        refresh.track();
        let page = page.get();
        suppliers.load(move || api::fetch_suppliers(page));
    });

    let open = move || {
        suppliers.items.with(|list| {
            with_open_debts(list)
                .into_iter()
                .map(|(s, total)| (s.id.clone(), s.name.clone(), total))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="finance__section">
            <h2 class="finance__section-title">"Débitos a vencer"</h2>
            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Fornecedor"</TableHeaderCell>
                            <TableHeaderCell>"Valor a Pagar"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=open
                            key=|(id, _, total)| (id.clone(), *total)
                            children=move |(_, name, total)| view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{name}</TableCellLayout></TableCell>
                                    <TableCellMoney value=total bold=true />
                                </TableRow>
                            }
                        />
                    </TableBody>
                </Table>
                {move || (!suppliers.loading.get() && open().is_empty()).then(|| view! {
                    <div class="table__empty">"Nenhum débito a vencer."</div>
                })}
            </div>
            <PaginationControls
                page=page
                fetched=Signal::derive(move || suppliers.len())
                on_page_change=Callback::new(move |p| page.set(p))
                disabled=Signal::derive(move || suppliers.loading.get())
            />
        </section>
    }
}
