use contracts::shared::api::{into_items, Record};
use contracts::system::users::{CreateUserRequest, User};

use crate::shared::http::{self, ApiError};

/// Fetch all users
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    let records: Vec<Record<User>> = http::get("/users/all").await?;
    Ok(into_items(records))
}

/// Create new user
pub async fn create_user(request: &CreateUserRequest) -> Result<(), ApiError> {
    http::post_unit("/users", request).await
}
