use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a002_product::aggregate::{Product, ProductCatalog};
use contracts::domain::a003_sale::aggregate::{Sale, SaleQuery, SaleRequest};
use contracts::shared::api::{into_items, Record};
use contracts::system::users::{deliverymen, User};

use crate::shared::http::{self, ApiError};
use crate::system::users::api::fetch_users;

pub async fn fetch_sales(query: SaleQuery) -> Result<Vec<Sale>, ApiError> {
    let records: Vec<Record<Sale>> = http::get_with_query("/sales", &query.query_pairs()).await?;
    Ok(into_items(records))
}

pub async fn fetch_sale(id: &str) -> Result<Sale, ApiError> {
    let record: Record<Sale> = http::get(&format!("/sales/{}", id)).await?;
    Ok(record.into_inner())
}

pub async fn create_sale(request: &SaleRequest) -> Result<(), ApiError> {
    http::post_unit("/sales", request).await
}

pub async fn update_sale(id: &str, request: &SaleRequest) -> Result<(), ApiError> {
    http::put_unit(&format!("/sales/{}", id), request).await
}

/// Every customer, for the sale dialog select
pub async fn fetch_all_customers() -> Result<Vec<Customer>, ApiError> {
    let records: Vec<Record<Customer>> = http::get("/customers/all").await?;
    Ok(into_items(records))
}

/// Price table used to fill sale lines
pub async fn fetch_catalog() -> Result<ProductCatalog, ApiError> {
    let records: Vec<Record<Product>> = http::get("/products").await?;
    Ok(ProductCatalog::new(into_items(records)))
}

pub async fn fetch_deliverymen() -> Result<Vec<User>, ApiError> {
    let users = fetch_users().await?;
    Ok(deliverymen(&users))
}
