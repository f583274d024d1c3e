mod state;

use chrono::NaiveDate;
use contracts::domain::a003_sale::aggregate::{OrderDirection, Sale, SaleOrderField};
use contracts::enums::ProductStatus;
use contracts::shared::pagination::PageRequest;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_sale::api;
use crate::domain::a003_sale::ui::sale_dialog::SaleDialog;
use crate::shared::components::date_input::DateRangeInput;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_cell_money::TableCellMoney;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_resource::ListResource;
use crate::shared::modal::use_modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

/// "2x P13, 1x P45"
pub(crate) fn products_summary(sale: &Sale) -> String {
    sale.products
        .iter()
        .map(|p| format!("{}x {}", p.quantity, p.product_type.display_name()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Distinct sale kinds of the lines, in line order
fn sale_kinds(sale: &Sale) -> String {
    let mut kinds: Vec<&'static str> = Vec::new();
    for p in &sale.products {
        let label = p.status.sale_label();
        if !kinds.contains(&label) {
            kinds.push(label);
        }
    }
    kinds.join(", ")
}

#[component]
pub fn SalesListPage() -> impl IntoView {
    let state = create_state();
    let sales = ListResource::<Sale>::new();
    let sale_modal = use_modal();

    let search = RwSignal::new(String::new());
    let start_date = RwSignal::new(None::<NaiveDate>);
    let end_date = RwSignal::new(None::<NaiveDate>);
    let sale_type = RwSignal::new("none".to_string());

    // Each filter change restarts from page 1
    Effect::new(move |_| {
        let text = search.get();
        // both ends or neither
        let (start, end) = match (start_date.get(), end_date.get()) {
            (Some(a), Some(b)) => (Some(a), Some(b)),
            _ => (None, None),
        };
        let kind = ProductStatus::from_code(&sale_type.get());
        state.maybe_update(|s| {
            let q = &mut s.query;
            let changed =
                q.search != text || q.start_date != start || q.end_date != end || q.sale_type != kind;
            if changed {
                q.search = text;
                q.start_date = start;
                q.end_date = end;
                q.sale_type = kind;
                q.page = PageRequest::first(q.page.items_per_page);
            }
            changed
        });
    });

    // refetch only when the query itself changes
    let query = Memo::new(move |_| state.with(|s| s.query.clone()));

    Effect::new(move |_| {
        let query = query.get();
        sales.load(move || api::fetch_sales(query));
    });

    let reload = move || {
        let query = query.get_untracked();
        sales.load(move || api::fetch_sales(query));
    };

    let sort_by = move |field: SaleOrderField| {
        move |_: leptos::ev::MouseEvent| state.update(|s| s.query.toggle_order(field))
    };
    let sort_mark = move |field: SaleOrderField| {
        move || {
            state.with(|s| {
                if s.query.order_by != field {
                    None
                } else if s.query.direction == OrderDirection::Asc {
                    Some(icon("arrow-up"))
                } else {
                    Some(icon("arrow-down"))
                }
            })
        }
    };

    let open_create = move |_| {
        state.update(|s| s.editing_id = None);
        sale_modal.show();
    };
    let open_edit = move |id: String| {
        state.update(|s| s.editing_id = Some(id));
        sale_modal.show();
    };

    let page_signal = Signal::derive(move || state.with(|s| s.query.page));
    let fetched = Signal::derive(move || sales.len());
    let editing_id = Signal::derive(move || state.with(|s| s.editing_id.clone()));

    view! {
        <PageFrame page_id="a003_sale--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Vendas"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=open_create>
                        {icon("plus")}
                        " Nova venda"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Filtros"</span>
                        </div>
                    </div>
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small>
                            <Input value=search placeholder="Buscar por cliente ou entregador" />
                            <DateRangeInput start=start_date end=end_date />
                            <Select value=sale_type>
                                <option value="none">"Todos os tipos"</option>
                                <option value="FULL">"Vasilhame + gás"</option>
                                <option value="EMPTY">"Troca de gás"</option>
                                <option value="COMODATO">"Comodato"</option>
                            </Select>
                        </Flex>
                    </div>
                </div>

                {move || sales.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>
                                    <span class="table__sortable" on:click=sort_by(SaleOrderField::Deliveryman)>
                                        "Entregador" {sort_mark(SaleOrderField::Deliveryman)}
                                    </span>
                                </TableHeaderCell>
                                <TableHeaderCell>"Produtos"</TableHeaderCell>
                                <TableHeaderCell>
                                    <span class="table__sortable" on:click=sort_by(SaleOrderField::PaymentMethod)>
                                        "Pagamento" {sort_mark(SaleOrderField::PaymentMethod)}
                                    </span>
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <span class="table__sortable" on:click=sort_by(SaleOrderField::Customer)>
                                        "Cliente" {sort_mark(SaleOrderField::Customer)}
                                    </span>
                                </TableHeaderCell>
                                <TableHeaderCell>"Tipo de venda"</TableHeaderCell>
                                <TableHeaderCell>
                                    <span class="table__sortable" on:click=sort_by(SaleOrderField::Total)>
                                        "Total" {sort_mark(SaleOrderField::Total)}
                                    </span>
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <span class="table__sortable" on:click=sort_by(SaleOrderField::CreatedAt)>
                                        "Data" {sort_mark(SaleOrderField::CreatedAt)}
                                    </span>
                                </TableHeaderCell>
                                <TableHeaderCell>"Ações"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || sales.items.get()
                                key=|s| s.id.clone()
                                children=move |sale: Sale| {
                                    let id = sale.id.clone();
                                    let deliveryman = sale.deliveryman_name().to_string();
                                    let products = products_summary(&sale);
                                    let payment = sale.payment_method.map(|m| m.display_name()).unwrap_or("-");
                                    let customer = sale.customer_name().to_string();
                                    let kinds = sale_kinds(&sale);
                                    let total = sale.total;
                                    let date = format_date(&sale.created_at);
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{deliveryman}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{products}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {payment}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{customer}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{kinds}</TableCellLayout></TableCell>
                                            <TableCellMoney value=total bold=true />
                                            <TableCell><TableCellLayout>{date}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| open_edit(id.clone())
                                                    >
                                                        {icon("edit")}
                                                        " Editar"
                                                    </Button>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || (!sales.loading.get() && sales.is_empty()).then(|| view! {
                        <div class="table__empty">"Nenhuma venda encontrada."</div>
                    })}
                </div>

                <PaginationControls
                    page=page_signal
                    fetched=fetched
                    on_page_change=Callback::new(move |p| state.update(|s| s.query.page = p))
                    disabled=Signal::derive(move || sales.loading.get())
                />
            </div>

            <SaleDialog modal=sale_modal editing_id=editing_id on_saved=Callback::new(move |_| reload()) />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale() -> Sale {
        serde_json::from_str(
            r#"{"id":"s1","products":[
                {"type":"P13","status":"EMPTY","quantity":2,"price":10000},
                {"type":"P45","status":"FULL","quantity":1,"price":45000},
                {"type":"P20","status":"EMPTY","quantity":1,"price":20000}
            ],"total":85000,"createdAt":"2024-03-15T10:00:00Z"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_products_summary_lists_quantities() {
        assert_eq!(products_summary(&sale()), "2x P13, 1x P45, 1x P20");
    }

    #[test]
    fn test_sale_kinds_are_distinct() {
        assert_eq!(sale_kinds(&sale()), "Troca de gás, Vasilhame + gás");
    }
}
