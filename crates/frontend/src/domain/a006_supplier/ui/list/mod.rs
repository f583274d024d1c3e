use contracts::domain::a005_debt::aggregate::Debt;
use contracts::domain::a006_supplier::aggregate::Supplier;
use contracts::shared::pagination::PageRequest;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a006_supplier::api::{self, SUPPLIERS_PER_PAGE};
use crate::domain::a006_supplier::ui::debt_dialog::{DebtDialog, DebtTarget};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_cell_money::TableCellMoney;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_resource::ListResource;
use crate::shared::modal::use_modal;
use crate::shared::money::format_brl;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

/// Unpaid first, then by due date
fn ordered_debts(supplier: &Supplier) -> Vec<Debt> {
    let mut debts = supplier.debts.clone();
    debts.sort_by(|a, b| a.paid.cmp(&b.paid).then_with(|| a.due_date.cmp(&b.due_date)));
    debts
}

#[component]
pub fn SupplierListPage() -> impl IntoView {
    let page = RwSignal::new(PageRequest::first(SUPPLIERS_PER_PAGE));
    let suppliers = ListResource::<Supplier>::new();
    let debt_modal = use_modal();
    let debt_target = RwSignal::new(None::<DebtTarget>);

    Effect::new(move |_| {
        let page = page.get();
        suppliers.load(move || api::fetch_suppliers(page));
    });

    let reload = Callback::new(move |_| {
        let page = page.get_untracked();
        suppliers.load(move || api::fetch_suppliers(page));
    });

    let open_debt = move |target: DebtTarget| {
        debt_target.set(Some(target));
        debt_modal.show();
    };

    view! {
        <PageFrame page_id="a006_supplier--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Fornecedores"</h1>
                </div>
            </div>

            <div class="page__content">
                {move || suppliers.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="supplier-grid">
                    <For
                        each=move || suppliers.items.get()
                        key=|s| (s.id.clone(), s.debts.len(), s.unpaid_total())
                        children=move |supplier: Supplier| {
                            let supplier_id = supplier.id.clone();
                            let debts = ordered_debts(&supplier);
                            view! {
                                <Card class="supplier-card">
                                    <div class="supplier-card__header">
                                        <div>
                                            <h2 class="supplier-card__name">{supplier.name.clone()}</h2>
                                            <span class="supplier-card__total">
                                                "Valor a pagar: " {format_brl(supplier.unpaid_total())}
                                            </span>
                                        </div>
                                        <Button
                                            appearance=ButtonAppearance::Secondary
                                            on_click=move |_| open_debt(DebtTarget::New { supplier_id: supplier_id.clone() })
                                        >
                                            {icon("plus")}
                                            " Novo débito"
                                        </Button>
                                    </div>
                                    <Table>
                                        <TableHeader>
                                            <TableRow>
                                                <TableHeaderCell>"Valor"</TableHeaderCell>
                                                <TableHeaderCell>"Vencimento"</TableHeaderCell>
                                                <TableHeaderCell>"Situação"</TableHeaderCell>
                                                <TableHeaderCell>"Ações"</TableHeaderCell>
                                            </TableRow>
                                        </TableHeader>
                                        <TableBody>
                                            {debts.into_iter().map(|debt| {
                                                let due = debt.due_date.as_deref().map(format_date).unwrap_or_else(|| "-".to_string());
                                                let paid = debt.paid;
                                                let amount = debt.amount;
                                                view! {
                                                    <TableRow>
                                                        <TableCellMoney value=amount />
                                                        <TableCell><TableCellLayout>{due}</TableCellLayout></TableCell>
                                                        <TableCell>
                                                            <TableCellLayout>
                                                                {if paid {
                                                                    view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Pago"</Badge> }.into_any()
                                                                } else {
                                                                    view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>"A pagar"</Badge> }.into_any()
                                                                }}
                                                            </TableCellLayout>
                                                        </TableCell>
                                                        <TableCell>
                                                            <TableCellLayout>
                                                                <Button
                                                                    appearance=ButtonAppearance::Subtle
                                                                    on_click=move |_| open_debt(DebtTarget::Edit(debt.clone()))
                                                                >
                                                                    {icon("edit")}
                                                                    " Editar"
                                                                </Button>
                                                            </TableCellLayout>
                                                        </TableCell>
                                                    </TableRow>
                                                }
                                            }).collect_view()}
                                        </TableBody>
                                    </Table>
                                </Card>
                            }
                        }
                    />
                </div>
                {move || (!suppliers.loading.get() && suppliers.is_empty()).then(|| view! {
                    <div class="table__empty">"Nenhum fornecedor encontrado."</div>
                })}

                <PaginationControls
                    page=page
                    fetched=Signal::derive(move || suppliers.len())
                    on_page_change=Callback::new(move |p| page.set(p))
                    disabled=Signal::derive(move || suppliers.loading.get())
                />
            </div>

            <DebtDialog modal=debt_modal target=debt_target on_saved=reload />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaid_debts_come_first() {
        let supplier: Supplier = serde_json::from_str(
            r#"{"id":"s1","name":"Ultragaz","debts":[
                {"id":"a","amount":100,"dueDate":"2024-01-10","paid":true},
                {"id":"b","amount":200,"dueDate":"2024-03-01","paid":false},
                {"id":"c","amount":300,"dueDate":"2024-02-01","paid":false}
            ]}"#,
        )
        .unwrap();
        let ids: Vec<String> = ordered_debts(&supplier).into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }
}
