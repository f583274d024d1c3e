//! Finance screen: company balance plus the ledger, deposit, transfer and
//! debt panels. Any mutation bumps `refresh` so every panel refetches.

mod cash_balances;
mod deposits;

use contracts::domain::a004_transaction::aggregate::Transaction;
use contracts::shared::pagination::PageRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_transaction::api::{self, TRANSACTIONS_PER_PAGE};
use crate::domain::a004_transaction::ui::transaction_dialog::TransactionDialog;
use crate::domain::a004_transaction::ui::transactions_table::TransactionsTable;
use crate::domain::a004_transaction::ui::update_date_dialog::UpdateDateDialog;
use crate::domain::a005_debt::ui::customer_debts::CustomerDebtsPanel;
use crate::domain::a006_supplier::ui::supplier_debts::SupplierDebtsPanel;
use crate::domain::a007_bank_account::ui::transfers::TransfersPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::list_resource::ListResource;
use crate::shared::modal::use_modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::toast::use_toast;
use cash_balances::CashBalancesPanel;
use deposits::DepositsPanel;

#[component]
pub fn FinancePage() -> impl IntoView {
    let toast = use_toast();
    let refresh = RwSignal::new(0_u32);
    let balance = RwSignal::new(None::<i64>);
    let page = RwSignal::new(PageRequest::first(TRANSACTIONS_PER_PAGE));
    let transactions = ListResource::<Transaction>::new();
    let add_modal = use_modal();
    let date_modal = use_modal();
    let date_target = RwSignal::new(None::<Transaction>);

    Effect::new(move |_| {
        refresh.track();
        spawn_local(async move {
            match api::fetch_balance().await {
                Ok(b) => balance.set(Some(b.cents())),
                Err(e) => toast.error(e.to_string()),
            }
        });
    });

    Effect::new(move |_| {
        refresh.track();
        let page = page.get();
        transactions.load(move || api::fetch_transactions(page));
    });

    let bump = Callback::new(move |_| refresh.update(|n| *n += 1));
    let edit_date = Callback::new(move |t: Transaction| {
        date_target.set(Some(t));
        date_modal.show();
    });

    view! {
        <PageFrame page_id="a004_transaction--finance" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Financeiro"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| add_modal.show()>
                        {icon("plus")}
                        " Nova transação"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-cards">
                    <StatCard label="Saldo da empresa" icon_name="wallet" value=balance />
                </div>

                <section class="finance__section">
                    <h2 class="finance__section-title">"Movimentações"</h2>
                    {move || transactions.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                    <TransactionsTable transactions=transactions on_edit_date=edit_date />
                    <PaginationControls
                        page=page
                        fetched=Signal::derive(move || transactions.len())
                        on_page_change=Callback::new(move |p| page.set(p))
                        disabled=Signal::derive(move || transactions.loading.get())
                    />
                </section>

                <DepositsPanel refresh=refresh />
                <CashBalancesPanel refresh=refresh />
                <TransfersPanel refresh=refresh on_changed=bump />
                <CustomerDebtsPanel refresh=refresh on_changed=bump />
                <SupplierDebtsPanel refresh=refresh />
            </div>

            <TransactionDialog modal=add_modal on_saved=bump />
            <UpdateDateDialog modal=date_modal target=date_target on_saved=bump />
        </PageFrame>
    }
}
