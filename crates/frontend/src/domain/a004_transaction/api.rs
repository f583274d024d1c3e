use contracts::domain::a004_transaction::aggregate::{
    CashBalance, CompanyBalance, DeliverymanTotals, DepositRequest, Transaction, TransactionKind,
    TransactionRequest, UpdateTransactionRequest,
};
use contracts::shared::api::{into_items, CentsValue, Record};
use contracts::shared::pagination::PageRequest;

use crate::shared::http::{self, ApiError};

pub const TRANSACTIONS_PER_PAGE: u32 = 5;
pub const DEPOSITS_PER_PAGE: u32 = 10;

pub async fn fetch_transactions(page: PageRequest) -> Result<Vec<Transaction>, ApiError> {
    let records: Vec<Record<Transaction>> =
        http::get_with_query("/transactions", &page.query_pairs()).await?;
    Ok(into_items(records))
}

pub async fn fetch_deposits(page: PageRequest) -> Result<Vec<Transaction>, ApiError> {
    let records: Vec<Record<Transaction>> =
        http::get_with_query("/transactions/deposits", &page.query_pairs()).await?;
    Ok(into_items(records))
}

pub async fn fetch_balance() -> Result<CompanyBalance, ApiError> {
    http::get("/transactions/balance").await
}

pub async fn fetch_cash_balances(page: PageRequest) -> Result<Vec<CashBalance>, ApiError> {
    let records: Vec<Record<CashBalance>> =
        http::get_with_query("/transactions/cashBalance", &page.query_pairs()).await?;
    Ok(into_items(records))
}

pub async fn fetch_expense_types() -> Result<Vec<TransactionKind>, ApiError> {
    let records: Vec<Record<TransactionKind>> = http::get("/transactions/expense/types").await?;
    Ok(into_items(records))
}

pub async fn fetch_income_types() -> Result<Vec<TransactionKind>, ApiError> {
    let records: Vec<Record<TransactionKind>> = http::get("/transactions/income/types").await?;
    Ok(into_items(records))
}

pub async fn create_transaction(request: &TransactionRequest) -> Result<(), ApiError> {
    http::post_unit("/transactions", request).await
}

pub async fn update_transaction(
    id: &str,
    request: &UpdateTransactionRequest,
) -> Result<(), ApiError> {
    http::patch_unit(&format!("/transactions/{}", id), request).await
}

pub async fn create_deposit(request: &DepositRequest) -> Result<(), ApiError> {
    http::post_unit("/transactions/deposit", request).await
}

/// The three summary cards of the deliveryman panel
pub async fn fetch_deliveryman_totals(user_id: &str) -> Result<DeliverymanTotals, ApiError> {
    let balance: CentsValue =
        http::get(&format!("/transactions/deliveryman/balance/{}", user_id)).await?;
    let expenses: CentsValue =
        http::get(&format!("/transactions/expenses-total-today/{}", user_id)).await?;
    let revenues: CentsValue =
        http::get(&format!("/sales/revenues-total-today/{}", user_id)).await?;
    Ok(DeliverymanTotals {
        balance: balance.0,
        expenses_today: expenses.0,
        revenues_today: revenues.0,
    })
}

pub async fn fetch_deliveryman_expenses(
    user_id: String,
    page: PageRequest,
) -> Result<Vec<Transaction>, ApiError> {
    let records: Vec<Record<Transaction>> = http::get_with_query(
        &format!("/transactions/expenses/deliveryman/{}", user_id),
        &page.query_pairs(),
    )
    .await?;
    Ok(into_items(records))
}
