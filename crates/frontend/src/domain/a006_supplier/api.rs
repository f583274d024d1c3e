use contracts::domain::a006_supplier::aggregate::Supplier;
use contracts::shared::pagination::PageRequest;

use crate::shared::http::{self, ApiError};

pub const SUPPLIERS_PER_PAGE: u32 = 10;

/// Suppliers decode their own envelope because of the sibling `_debts`
pub async fn fetch_suppliers(page: PageRequest) -> Result<Vec<Supplier>, ApiError> {
    http::get_with_query("/suppliers", &page.query_pairs()).await
}
