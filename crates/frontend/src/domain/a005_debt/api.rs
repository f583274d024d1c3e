use contracts::domain::a005_debt::aggregate::{
    mark_as_paid_path, CreateDebtRequest, CustomerDebtSummary, UpdateDebtRequest,
};
use contracts::shared::pagination::PageRequest;

use crate::shared::http::{self, ApiError};

pub const CUSTOMER_DEBTS_PER_PAGE: u32 = 10;
const SCAN_PAGE_SIZE: u32 = 50;

pub async fn fetch_customers_with_debts(
    page: PageRequest,
) -> Result<Vec<CustomerDebtSummary>, ApiError> {
    http::get_with_query("/sales/customers-with-debts-total", &page.query_pairs()).await
}

/// Debt summary of one customer. The API has no per-customer endpoint, so
/// the summary pages are scanned until a short page.
pub async fn fetch_customer_debt(
    customer_id: &str,
) -> Result<Option<CustomerDebtSummary>, ApiError> {
    let mut page = PageRequest::first(SCAN_PAGE_SIZE);
    loop {
        let rows = fetch_customers_with_debts(page).await?;
        let fetched = rows.len();
        if let Some(found) = rows.into_iter().find(|r| r.customer_id == customer_id) {
            return Ok(Some(found));
        }
        if !page.has_next(fetched) {
            return Ok(None);
        }
        page = page.next();
    }
}

pub async fn mark_sale_paid(sale_id: &str) -> Result<(), ApiError> {
    http::patch_empty(&mark_as_paid_path(sale_id)).await
}

/// Marks every unpaid sale in order and stops at the first failure.
/// Returns how many sales were marked.
pub async fn mark_all_paid(summary: &CustomerDebtSummary) -> Result<usize, ApiError> {
    let ids = summary.unpaid_sale_ids();
    for id in &ids {
        mark_sale_paid(id).await?;
    }
    log::info!("Marked {} sales of customer {} as paid", ids.len(), summary.customer_id);
    Ok(ids.len())
}

pub async fn create_debt(request: &CreateDebtRequest) -> Result<(), ApiError> {
    http::post_unit("/debts", request).await
}

pub async fn update_debt(id: &str, request: &UpdateDebtRequest) -> Result<(), ApiError> {
    http::patch_unit(&format!("/debts/{}", id), request).await
}
