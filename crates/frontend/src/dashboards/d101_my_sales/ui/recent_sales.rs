use chrono::{Duration, NaiveDate};
use contracts::domain::a003_sale::aggregate::{Sale, SaleQuery};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_sale::api::fetch_sales;
use crate::domain::a003_sale::ui::list::products_summary;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_cell_money::TableCellMoney;
use crate::shared::date_utils::{format_date, today};
use crate::shared::list_resource::ListResource;

/// Last seven days, today included
pub(super) fn last_seven_days(day: NaiveDate) -> SaleQuery {
    SaleQuery {
        start_date: Some(day - Duration::days(6)),
        end_date: Some(day),
        ..Default::default()
    }
}

#[component]
pub fn RecentSales(#[prop(into)] refresh: Signal<u32>) -> impl IntoView {
    let query = RwSignal::new(last_seven_days(today()));
    let sales = ListResource::<Sale>::new();

    Effect::new(move |_| {
        refresh.track();
        let query = query.get();
        sales.load(move || fetch_sales(query));
    });

    view! {
        <section class="dashboard__section">
            <h2 class="dashboard__section-title">"Vendas dos últimos 7 dias"</h2>
            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Cliente"</TableHeaderCell>
                            <TableHeaderCell>"Produtos"</TableHeaderCell>
                            <TableHeaderCell>"Pagamento"</TableHeaderCell>
                            <TableHeaderCell>"Total"</TableHeaderCell>
                            <TableHeaderCell>"Data"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || sales.items.get()
                            key=|s| s.id.clone()
                            children=move |sale: Sale| {
                                let customer = sale.customer_name().to_string();
                                let products = products_summary(&sale);
                                let payment = sale.payment_method.map(|m| m.display_name()).unwrap_or("-");
                                let total = sale.total;
                                let date = format_date(&sale.created_at);
                                view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{customer}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{products}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {payment}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCellMoney value=total bold=true />
                                    <TableCell><TableCellLayout>{date}</TableCellLayout></TableCell>
                                </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
                {move || (!sales.loading.get() && sales.is_empty()).then(|| view! {
                    <div class="table__empty">"Nenhuma venda nos últimos 7 dias."</div>
                })}
            </div>
            <PaginationControls
                page=Signal::derive(move || query.with(|q| q.page))
                fetched=Signal::derive(move || sales.len())
                on_page_change=Callback::new(move |p| query.update(|q| q.page = p))
                disabled=Signal::derive(move || sales.loading.get())
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_covers_seven_days() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let q = last_seven_days(day);
        assert_eq!(q.start_date, NaiveDate::from_ymd_opt(2024, 3, 4));
        assert_eq!(q.end_date, Some(day));
        assert_eq!(q.page.page, 1);
    }
}
