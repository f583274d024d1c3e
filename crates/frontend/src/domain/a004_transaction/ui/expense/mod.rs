use contracts::domain::a004_transaction::aggregate::Transaction;
use contracts::shared::pagination::PageRequest;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_transaction::api::{self, TRANSACTIONS_PER_PAGE};
use crate::domain::a004_transaction::ui::expense_dialog::ExpenseDialog;
use crate::domain::a004_transaction::ui::transactions_table::TransactionsTable;
use crate::domain::a004_transaction::ui::update_date_dialog::UpdateDateDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_resource::ListResource;
use crate::shared::modal::use_modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
pub fn ExpensePage() -> impl IntoView {
    let page = RwSignal::new(PageRequest::first(TRANSACTIONS_PER_PAGE));
    let transactions = ListResource::<Transaction>::new();
    let add_modal = use_modal();
    let date_modal = use_modal();
    let date_target = RwSignal::new(None::<Transaction>);

    Effect::new(move |_| {
        let page = page.get();
        transactions.load(move || api::fetch_transactions(page));
    });

    let reload = Callback::new(move |_| {
        let page = page.get_untracked();
        transactions.load(move || api::fetch_transactions(page));
    });

    view! {
        <PageFrame page_id="a004_transaction--expense" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Despesas"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| add_modal.show()>
                        {icon("plus")}
                        " Nova despesa"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || transactions.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <TransactionsTable
                    transactions=transactions
                    on_edit_date=Callback::new(move |t: Transaction| {
                        date_target.set(Some(t));
                        date_modal.show();
                    })
                />
                <PaginationControls
                    page=page
                    fetched=Signal::derive(move || transactions.len())
                    on_page_change=Callback::new(move |p| page.set(p))
                    disabled=Signal::derive(move || transactions.loading.get())
                />
            </div>

            <ExpenseDialog modal=add_modal on_saved=reload />
            <UpdateDateDialog modal=date_modal target=date_target on_saved=reload />
        </PageFrame>
    }
}
