use contracts::domain::a004_transaction::aggregate::{DeliverymanTotals, Transaction};
use contracts::shared::pagination::PageRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::recent_sales::RecentSales;
use crate::domain::a003_sale::ui::sale_dialog::SaleDialog;
use crate::domain::a004_transaction::api::{self, TRANSACTIONS_PER_PAGE};
use crate::domain::a004_transaction::ui::deposit_dialog::DepositDialog;
use crate::domain::a004_transaction::ui::expense_dialog::ExpenseDialog;
use crate::domain::a004_transaction::ui::transactions_table::TransactionsTable;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::list_resource::ListResource;
use crate::shared::modal::use_modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_session_user;

/// Home of a deliveryman: own totals, sales, deposits and expenses
#[component]
pub fn MySalesDashboard() -> impl IntoView {
    let toast = use_toast();
    let user = use_session_user();
    let refresh = RwSignal::new(0_u32);
    let totals = RwSignal::new(None::<DeliverymanTotals>);
    let page = RwSignal::new(PageRequest::first(TRANSACTIONS_PER_PAGE));
    let expenses = ListResource::<Transaction>::new();
    let sale_modal = use_modal();
    let deposit_modal = use_modal();
    let expense_modal = use_modal();

    let user_id = Memo::new(move |_| user.with(|u| u.as_ref().map(|u| u.id.clone())));

    Effect::new(move |_| {
        refresh.track();
        let Some(id) = user_id.get() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_deliveryman_totals(&id).await {
                Ok(t) => totals.set(Some(t)),
                Err(e) => toast.error(e.to_string()),
            }
        });
    });

    Effect::new(move |_| {
        refresh.track();
        let page = page.get();
        let Some(id) = user_id.get() else {
            return;
        };
        expenses.load(move || api::fetch_deliveryman_expenses(id, page));
    });

    let bump = Callback::new(move |_| refresh.update(|n| *n += 1));
    let balance = Signal::derive(move || totals.get().map(|t| t.balance));
    let expenses_today = Signal::derive(move || totals.get().map(|t| t.expenses_today));
    let revenues_today = Signal::derive(move || totals.get().map(|t| t.revenues_today));

    view! {
        <PageFrame page_id="d101_my_sales--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Minhas vendas"</h1>
                </div>
                <div class="page__header-right">
                    <Flex gap=FlexGap::Small>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| sale_modal.show()>
                            {icon("plus")}
                            " Nova venda"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| deposit_modal.show()>
                            {icon("bank")}
                            " Informar depósito"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| expense_modal.show()>
                            {icon("expense")}
                            " Cadastrar Nova despesa"
                        </Button>
                    </Flex>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-cards">
                    <StatCard label="Saldo do entregador" icon_name="wallet" value=balance />
                    <StatCard label="Total de despesas do dia" icon_name="expense" value=expenses_today />
                    <StatCard label="Total de receitas do dia" icon_name="sales" value=revenues_today />
                </div>

                <RecentSales refresh=refresh />

                <section class="dashboard__section">
                    <h2 class="dashboard__section-title">"Despesas"</h2>
                    {move || expenses.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                    <TransactionsTable transactions=expenses empty_text="Nenhuma despesa registrada." />
                    <PaginationControls
                        page=page
                        fetched=Signal::derive(move || expenses.len())
                        on_page_change=Callback::new(move |p| page.set(p))
                        disabled=Signal::derive(move || expenses.loading.get())
                    />
                </section>
            </div>

            <SaleDialog modal=sale_modal editing_id=Signal::derive(|| None::<String>) on_saved=bump />
            <DepositDialog modal=deposit_modal on_saved=bump />
            <ExpenseDialog modal=expense_modal on_saved=bump />
        </PageFrame>
    }
}
