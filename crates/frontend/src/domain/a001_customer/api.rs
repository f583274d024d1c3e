use contracts::domain::a001_customer::aggregate::{
    CreateCustomerRequest, Customer, UpdateCustomerRequest,
};
use contracts::shared::api::{into_items, Record};
use contracts::shared::pagination::PageRequest;

use crate::shared::http::{self, ApiError};

pub const CUSTOMERS_PER_PAGE: u32 = 5;

pub async fn fetch_page(page: PageRequest) -> Result<Vec<Customer>, ApiError> {
    let records: Vec<Record<Customer>> =
        http::get_with_query("/customers", &page.query_pairs()).await?;
    Ok(into_items(records))
}

pub async fn fetch_by_id(id: &str) -> Result<Customer, ApiError> {
    let record: Record<Customer> = http::get(&format!("/customers/{}", id)).await?;
    Ok(record.into_inner())
}

pub async fn create(request: &CreateCustomerRequest) -> Result<(), ApiError> {
    http::post_unit("/customers", request).await
}

pub async fn update(id: &str, request: &UpdateCustomerRequest) -> Result<(), ApiError> {
    http::patch_unit(&format!("/customers/{}", id), request).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    http::delete(&format!("/customers/{}", id)).await
}
