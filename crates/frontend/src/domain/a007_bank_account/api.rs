use chrono::NaiveDate;
use contracts::domain::a007_bank_account::aggregate::{AccountTransfer, BankAccount, TransferRequest};
use contracts::shared::api::{into_items, Record};
use contracts::shared::pagination::PageRequest;

use crate::shared::http::{self, ApiError};

pub const TRANSFERS_PER_PAGE: u32 = 10;

/// Page plus optional date range of the transfer list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferQuery {
    pub page: PageRequest,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Default for TransferQuery {
    fn default() -> Self {
        Self {
            page: PageRequest::first(TRANSFERS_PER_PAGE),
            start_date: None,
            end_date: None,
        }
    }
}

impl TransferQuery {
    /// The range is sent only when both ends are set
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.page.query_pairs();
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            pairs.push(("startDate", start.format("%Y-%m-%d").to_string()));
            pairs.push(("endDate", end.format("%Y-%m-%d").to_string()));
        }
        pairs
    }
}

pub async fn fetch_accounts() -> Result<Vec<BankAccount>, ApiError> {
    let records: Vec<Record<BankAccount>> = http::get("/bank-account").await?;
    Ok(into_items(records))
}

pub async fn delete_account(id: &str) -> Result<(), ApiError> {
    http::delete(&format!("/bank-account/{}", id)).await
}

pub async fn fetch_transfers(query: TransferQuery) -> Result<Vec<AccountTransfer>, ApiError> {
    let records: Vec<Record<AccountTransfer>> =
        http::get_with_query("/account-transfer", &query.query_pairs()).await?;
    Ok(into_items(records))
}

pub async fn create_transfer(request: &TransferRequest) -> Result<(), ApiError> {
    http::post_unit("/account-transfer", request).await
}

pub async fn update_transfer(id: &str, request: &TransferRequest) -> Result<(), ApiError> {
    http::patch_unit(&format!("/account-transfer/{}", id), request).await
}

pub async fn delete_transfer(id: &str) -> Result<(), ApiError> {
    http::delete(&format!("/account-transfer/{}", id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_range_is_not_sent() {
        let mut query = TransferQuery {
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            ..Default::default()
        };
        assert_eq!(query.query_pairs().len(), 2);
        query.end_date = NaiveDate::from_ymd_opt(2024, 3, 31);
        let pairs = query.query_pairs();
        assert!(pairs.contains(&("startDate", "2024-03-01".to_string())));
        assert!(pairs.contains(&("endDate", "2024-03-31".to_string())));
    }
}
