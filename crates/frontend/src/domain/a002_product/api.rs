use contracts::domain::a002_product::aggregate::{Product, StockAdjustment, StockDirection};
use contracts::shared::api::{into_items, Record};

use crate::shared::http::{self, ApiError};

/// Every stock line
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    let records: Vec<Record<Product>> = http::get("/products/list").await?;
    Ok(into_items(records))
}

pub async fn adjust_stock(
    product_id: &str,
    direction: StockDirection,
    adjustment: StockAdjustment,
) -> Result<(), ApiError> {
    http::patch_unit(&direction.path(product_id), &adjustment).await
}
