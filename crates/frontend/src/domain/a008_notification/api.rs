use contracts::domain::a008_notification::aggregate::Notification;
use contracts::shared::api::{into_items, Record};

use crate::shared::http::{self, ApiError};

pub async fn fetch_notifications() -> Result<Vec<Notification>, ApiError> {
    let records: Vec<Record<Notification>> = http::get("/notifications").await?;
    Ok(into_items(records))
}
