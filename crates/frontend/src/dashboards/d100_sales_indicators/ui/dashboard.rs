use chrono::NaiveDate;
use contracts::domain::a003_sale::aggregate::{IndicatorsQuery, SalesIndicators};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d100_sales_indicators::api;
use crate::domain::a003_sale::api::fetch_deliverymen;
use crate::shared::components::date_input::DateRangeInput;
use crate::shared::components::option_select::OptionSelect;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table_cell_money::TableCellMoney;
use crate::shared::date_utils::{format_date, month_name};
use crate::shared::icons::icon;
use crate::shared::list_resource::RequestSequence;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::toast::use_toast;

/// Daily and monthly averages over the periods that had sales
fn averages(indicators: &SalesIndicators) -> (i64, i64) {
    let per = |count: usize| {
        if count == 0 {
            0
        } else {
            indicators.total_sales / count as i64
        }
    };
    (
        per(indicators.total_per_day.len()),
        per(indicators.total_per_month.len()),
    )
}

fn month_label(year: i32, month: u32) -> String {
    format!("{} de {}", month_name(month), year)
}

/// Sales indicators for the admin home
#[component]
pub fn SalesIndicatorsDashboard() -> impl IntoView {
    let toast = use_toast();
    let start_date = RwSignal::new(None::<NaiveDate>);
    let end_date = RwSignal::new(None::<NaiveDate>);
    let deliveryman = RwSignal::new(String::new());
    let deliverymen = RwSignal::new(Vec::<(String, String)>::new());
    let (data, set_data) = signal(None::<SalesIndicators>);
    let (loading, set_loading) = signal(false);
    let sequence = StoredValue::new(RequestSequence::new());

    spawn_local(async move {
        match fetch_deliverymen().await {
            Ok(users) => deliverymen.set(users.into_iter().map(|u| (u.id, u.name)).collect()),
            Err(e) => log::error!("Failed to load deliverymen: {}", e),
        }
    });

    Effect::new(move |_| {
        let query = IndicatorsQuery {
            start_date: start_date.get(),
            end_date: end_date.get(),
            deliveryman_id: Some(deliveryman.get()).filter(|id| !id.is_empty()),
        };
        let ticket = sequence.with_value(|s| s.begin());
        set_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_indicators(query).await;
            if !sequence.with_value(|s| s.is_current(ticket)) {
                log::debug!("Discarding stale indicators response");
                return;
            }
            match result {
                Ok(indicators) => set_data.set(Some(indicators)),
                Err(e) => toast.error(e.to_string()),
            }
            set_loading.set(false);
        });
    });

    let total = Signal::derive(move || data.with(|d| d.as_ref().map(|d| d.total_sales)));
    let daily = Signal::derive(move || data.with(|d| d.as_ref().map(|d| averages(d).0)));
    let monthly = Signal::derive(move || data.with(|d| d.as_ref().map(|d| averages(d).1)));

    let clear_filters = move |_| {
        start_date.set(None);
        end_date.set(None);
        deliveryman.set(String::new());
    };

    view! {
        <PageFrame page_id="d100_sales_indicators--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                </div>
                <div class="page__header-right">
                    <Show when=move || loading.get()>
                        <Spinner size=SpinnerSize::Tiny />
                    </Show>
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
                            <DateRangeInput start=start_date end=end_date />
                            <OptionSelect value=deliveryman options=deliverymen placeholder="Todos" />
                            <Button appearance=ButtonAppearance::Subtle on_click=clear_filters>
                                {icon("x")}
                                " Limpar"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <div class="stat-cards">
                    <StatCard label="Total de Vendas" icon_name="sales" value=total />
                    <StatCard label="Média Diária de Vendas" icon_name="dashboard" value=daily />
                    <StatCard label="Média Mensal de Vendas" icon_name="dashboard" value=monthly />
                </div>

                <div class="dashboard__grid">
                    <section class="dashboard__section">
                        <h2 class="dashboard__section-title">"Total de Vendas por Dia"</h2>
                        <div class="table-wrapper">
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Dia"</TableHeaderCell>
                                        <TableHeaderCell>"Total"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    <For
                                        each=move || data.with(|d| d.as_ref().map(|d| d.total_per_day.clone()).unwrap_or_default())
                                        key=|d| (d.created_at.clone(), d.total)
                                        children=move |day| view! {
                                            <TableRow>
                                                <TableCell><TableCellLayout>{format_date(&day.created_at)}</TableCellLayout></TableCell>
                                                <TableCellMoney value=day.total />
                                            </TableRow>
                                        }
                                    />
                                </TableBody>
                            </Table>
                        </div>
                    </section>

                    <section class="dashboard__section">
                        <h2 class="dashboard__section-title">"Total de Vendas por Mês"</h2>
                        <div class="table-wrapper">
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Mês"</TableHeaderCell>
                                        <TableHeaderCell>"Total"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    <For
                                        each=move || data.with(|d| d.as_ref().map(|d| d.total_per_month.clone()).unwrap_or_default())
                                        key=|m| (m.year, m.month, m.total)
                                        children=move |m| view! {
                                            <TableRow>
                                                <TableCell><TableCellLayout>{month_label(m.year, m.month)}</TableCellLayout></TableCell>
                                                <TableCellMoney value=m.total />
                                            </TableRow>
                                        }
                                    />
                                </TableBody>
                            </Table>
                        </div>
                    </section>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_averages_divide_by_periods_with_sales() {
        let indicators: SalesIndicators = serde_json::from_str(
            r#"{"totalSales":90000,
                "totalPerDay":[{"createdAt":"2024-03-01","total":30000},{"createdAt":"2024-03-02","total":30000},{"createdAt":"2024-03-03","total":30000}],
                "totalPerMonth":[{"year":2024,"month":3,"total":90000}]}"#,
        )
        .unwrap();
        assert_eq!(averages(&indicators), (30000, 90000));
    }

    #[test]
    fn test_empty_indicators_average_zero() {
        assert_eq!(averages(&SalesIndicators::default()), (0, 0));
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(2024, 3), "março de 2024");
    }
}
