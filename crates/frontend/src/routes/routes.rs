use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;
use thaw::*;

use crate::dashboards::{MySalesDashboard, SalesIndicatorsDashboard};
use crate::domain::a001_customer::ui::details::CustomerDetailsPage;
use crate::domain::a001_customer::ui::list::CustomersListPage;
use crate::domain::a002_product::ui::collect::CollectPage;
use crate::domain::a002_product::ui::list::ProductsListPage;
use crate::domain::a003_sale::ui::list::SalesListPage;
use crate::domain::a004_transaction::ui::expense::ExpensePage;
use crate::domain::a004_transaction::ui::finance::FinancePage;
use crate::domain::a005_debt::ui::customer_debt::CustomerDebtPage;
use crate::domain::a006_supplier::ui::list::SupplierListPage;
use crate::domain::a007_bank_account::ui::list::BankAccountsPage;
use crate::domain::a008_notification::ui::list::NotificationsPage;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RouteGuard;
use crate::system::pages::contract::ContractPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::profile::ProfilePage;
use crate::system::pages::recovery_password::RecoveryPasswordPage;
use crate::system::users::ui::list::UsersListPage;

/// Sends `/`, `/app` and unknown paths to the home of the signed-in role
#[component]
fn HomeRedirect() -> impl IntoView {
    let (auth_state, _) = use_auth();

    move || {
        let state = auth_state.get();
        if !state.ready {
            return view! { <Spinner /> }.into_any();
        }
        let target = state.role().map(|r| r.home()).unwrap_or("/login");
        view! { <Redirect path=target /> }.into_any()
    }
}

#[component]
fn GuardedShell() -> impl IntoView {
    view! {
        <RouteGuard>
            <Shell />
        </RouteGuard>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <HomeRedirect /> }>
                <Route path=path!("/") view=HomeRedirect />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/recovery-password") view=RecoveryPasswordPage />
                <ParentRoute path=path!("/app") view=GuardedShell>
                    <Route path=path!("") view=HomeRedirect />
                    <Route path=path!("profile") view=ProfilePage />
                    <Route path=path!("dashboard") view=SalesIndicatorsDashboard />
                    <Route path=path!("users") view=UsersListPage />
                    <Route path=path!("customers") view=CustomersListPage />
                    <Route path=path!("customers/:id") view=CustomerDetailsPage />
                    <Route path=path!("finance") view=FinancePage />
                    <Route path=path!("finance/debt/:customerId") view=CustomerDebtPage />
                    <Route path=path!("sales") view=SalesListPage />
                    <Route path=path!("expense") view=ExpensePage />
                    <Route path=path!("products") view=ProductsListPage />
                    <Route path=path!("supplier") view=SupplierListPage />
                    <Route path=path!("bank-accounts") view=BankAccountsPage />
                    <Route path=path!("collect") view=CollectPage />
                    <Route path=path!("notifications") view=NotificationsPage />
                    <Route path=path!("my-sales") view=MySalesDashboard />
                    <Route path=path!("contract") view=ContractPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
