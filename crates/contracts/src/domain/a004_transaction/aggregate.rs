use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::{TransactionCategory, TransactionType};
use crate::shared::api::{CentsValue, NamedRef};

// ============================================================================
// Aggregate
// ============================================================================

/// Ledger entry. `amount` is positive cents; the sign comes from `transaction_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub transaction_type: TransactionType,
    pub category: TransactionCategory,
    #[serde(default)]
    pub custom_category: Option<String>,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user: Option<NamedRef>,
    #[serde(default)]
    pub bank: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

crate::impl_identified!(Transaction);

impl Transaction {
    pub fn custom_category_label(&self) -> &str {
        self.custom_category
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or("-")
    }

    pub fn description_label(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("-")
    }
}

/// Named expense or income type configured on the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionKind {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub name: String,
}

crate::impl_identified!(TransactionKind);

/// Option appended to the server's expense types; requires free text
pub const OTHER_EXPENSE_TYPE: &str = "outros";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    #[error("Selecione uma categoria")]
    MissingCategory,
    #[error("O valor deve ser um inteiro positivo.")]
    NonPositiveAmount,
    #[error("O campo custom é obrigatório quando o tipo é 'outros'")]
    MissingCustomCategory,
    #[error("A data do depósito é obrigatória")]
    MissingDepositDate,
    #[error("O horário é obrigatório")]
    MissingDepositTime,
    #[error("Selecione uma data e horário válidos")]
    InvalidDepositTime,
    #[error("Alguma data deve ser selecionada")]
    MissingDate,
}

/// Body of `POST /transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub transaction_type: TransactionType,
    pub category: TransactionCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: i64,
    pub user_id: String,
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ============================================================================
// Forms
// ============================================================================

/// Manual entry on the finance screen: INCOME or WITHDRAW
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionForm {
    pub category: Option<TransactionCategory>,
    pub custom_category: String,
    pub description: String,
    pub amount: i64,
}

impl TransactionForm {
    pub fn categories() -> Vec<TransactionCategory> {
        vec![TransactionCategory::Income, TransactionCategory::Withdraw]
    }

    pub fn to_request(&self, user_id: &str) -> Result<TransactionRequest, TransactionError> {
        let category = self.category.ok_or(TransactionError::MissingCategory)?;
        if self.amount <= 0 {
            return Err(TransactionError::NonPositiveAmount);
        }
        let custom_category = non_empty(&self.custom_category);
        if category == TransactionCategory::Custom && custom_category.is_none() {
            return Err(TransactionError::MissingCustomCategory);
        }
        Ok(TransactionRequest {
            transaction_type: category.direction(),
            category,
            custom_category,
            description: non_empty(&self.description),
            amount: self.amount,
            user_id: user_id.to_string(),
        })
    }
}

/// Expense entry. `expense_type` holds a server type name or [`OTHER_EXPENSE_TYPE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseForm {
    pub category: TransactionCategory,
    pub expense_type: String,
    pub custom: String,
    pub description: String,
    pub amount: i64,
}

impl Default for ExpenseForm {
    fn default() -> Self {
        Self {
            category: TransactionCategory::Expense,
            expense_type: String::new(),
            custom: String::new(),
            description: String::new(),
            amount: 0,
        }
    }
}

impl ExpenseForm {
    pub fn categories() -> Vec<TransactionCategory> {
        vec![TransactionCategory::Expense, TransactionCategory::Custom]
    }

    pub fn needs_custom_text(&self) -> bool {
        self.category == TransactionCategory::Custom || self.expense_type == OTHER_EXPENSE_TYPE
    }

    pub fn to_request(&self, user_id: &str) -> Result<TransactionRequest, TransactionError> {
        if self.amount <= 0 {
            return Err(TransactionError::NonPositiveAmount);
        }
        let custom_category = if self.needs_custom_text() {
            Some(non_empty(&self.custom).ok_or(TransactionError::MissingCustomCategory)?)
        } else {
            non_empty(&self.expense_type)
        };
        Ok(TransactionRequest {
            transaction_type: TransactionType::Exit,
            category: self.category,
            custom_category,
            description: non_empty(&self.description),
            amount: self.amount,
            user_id: user_id.to_string(),
        })
    }
}

/// Cash deposit reported by a deliveryman
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepositForm {
    pub date: Option<NaiveDate>,
    /// `HH:MM`
    pub time: String,
    pub bank: String,
    pub amount: i64,
}

/// Body of `POST /transactions/deposit`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    pub transaction_type: TransactionType,
    pub category: TransactionCategory,
    pub amount: i64,
    pub deliveryman_id: String,
    pub deposit_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
}

impl DepositForm {
    pub fn deposit_date(&self) -> Result<NaiveDateTime, TransactionError> {
        let date = self.date.ok_or(TransactionError::MissingDepositDate)?;
        let time = self.time.trim();
        if time.is_empty() {
            return Err(TransactionError::MissingDepositTime);
        }
        let time = NaiveTime::parse_from_str(time, "%H:%M")
            .map_err(|_| TransactionError::InvalidDepositTime)?;
        Ok(date.and_time(time))
    }

    pub fn to_request(&self, deliveryman_id: &str) -> Result<DepositRequest, TransactionError> {
        let when = self.deposit_date()?;
        if self.amount <= 0 {
            return Err(TransactionError::NonPositiveAmount);
        }
        Ok(DepositRequest {
            transaction_type: TransactionType::Entry,
            category: TransactionCategory::Deposit,
            amount: self.amount,
            deliveryman_id: deliveryman_id.to_string(),
            deposit_date: when.format("%Y-%m-%dT%H:%M:%S").to_string(),
            bank: non_empty(&self.bank),
        })
    }
}

/// Body of `PATCH /transactions/:id`: the full entry plus the new date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransactionRequest {
    pub transaction_type: TransactionType,
    pub category: TransactionCategory,
    pub custom_category: Option<String>,
    pub description: Option<String>,
    pub amount: i64,
    pub user_id: Option<String>,
    pub created_at: String,
}

/// Date picked in the edit-date dialog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateTransactionDate {
    pub date: Option<NaiveDate>,
}

impl UpdateTransactionDate {
    /// Moves `transaction` to the picked day, keeping its time of day when known
    pub fn to_request(
        &self,
        transaction: &Transaction,
    ) -> Result<UpdateTransactionRequest, TransactionError> {
        let date = self.date.ok_or(TransactionError::MissingDate)?;
        let time = parse_time_of_day(&transaction.created_at).unwrap_or(NaiveTime::MIN);
        Ok(UpdateTransactionRequest {
            transaction_type: transaction.transaction_type,
            category: transaction.category,
            custom_category: transaction.custom_category.clone(),
            description: transaction.description.clone(),
            amount: transaction.amount,
            user_id: transaction.user_id.clone(),
            created_at: date.and_time(time).format("%Y-%m-%dT%H:%M:%S").to_string(),
        })
    }
}

fn parse_time_of_day(iso: &str) -> Option<NaiveTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(iso) {
        return Some(dt.naive_utc().time());
    }
    NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.time())
}

// ============================================================================
// Balances
// ============================================================================

/// `GET /transactions/balance`: a bare number or `{ balance }`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct CompanyBalance(pub CentsValue);

impl CompanyBalance {
    pub fn cents(&self) -> i64 {
        self.0 .0
    }
}

/// Row of `GET /transactions/cashBalance`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashBalance {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub cash_balance: i64,
}

crate::impl_identified!(CashBalance);

/// Summary cards of the deliveryman panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliverymanTotals {
    pub balance: i64,
    pub expenses_today: i64,
    pub revenues_today: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_maps_to_entry() {
        let form = TransactionForm {
            category: Some(TransactionCategory::Income),
            custom_category: "Aporte".into(),
            description: " ".into(),
            amount: 5000,
        };
        let req = form.to_request("u1").unwrap();
        assert_eq!(req.transaction_type, TransactionType::Entry);
        assert_eq!(req.description, None);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["transactionType"], "ENTRY");
        assert_eq!(json["category"], "INCOME");
        assert_eq!(json["customCategory"], "Aporte");
        assert_eq!(json["userId"], "u1");
    }

    #[test]
    fn test_withdraw_maps_to_exit() {
        let form = TransactionForm {
            category: Some(TransactionCategory::Withdraw),
            amount: 100,
            ..Default::default()
        };
        assert_eq!(form.to_request("u").unwrap().transaction_type, TransactionType::Exit);
    }

    #[test]
    fn test_transaction_form_errors() {
        assert_eq!(
            TransactionForm::default().to_request("u"),
            Err(TransactionError::MissingCategory)
        );
        let zero = TransactionForm {
            category: Some(TransactionCategory::Income),
            ..Default::default()
        };
        assert_eq!(zero.to_request("u"), Err(TransactionError::NonPositiveAmount));
        let custom = TransactionForm {
            category: Some(TransactionCategory::Custom),
            amount: 10,
            ..Default::default()
        };
        assert_eq!(custom.to_request("u"), Err(TransactionError::MissingCustomCategory));
    }

    #[test]
    fn test_expense_uses_type_name() {
        let form = ExpenseForm {
            expense_type: "combustível".into(),
            amount: 8000,
            ..Default::default()
        };
        let req = form.to_request("d1").unwrap();
        assert_eq!(req.transaction_type, TransactionType::Exit);
        assert_eq!(req.category, TransactionCategory::Expense);
        assert_eq!(req.custom_category.as_deref(), Some("combustível"));
    }

    #[test]
    fn test_expense_other_requires_text() {
        let mut form = ExpenseForm {
            expense_type: OTHER_EXPENSE_TYPE.into(),
            amount: 100,
            ..Default::default()
        };
        assert_eq!(form.to_request("d1"), Err(TransactionError::MissingCustomCategory));
        form.custom = "pedágio".into();
        assert_eq!(
            form.to_request("d1").unwrap().custom_category.as_deref(),
            Some("pedágio")
        );
    }

    #[test]
    fn test_expense_amount_must_be_positive() {
        let form = ExpenseForm {
            expense_type: "x".into(),
            amount: -1,
            ..Default::default()
        };
        assert_eq!(
            form.to_request("d").unwrap_err().to_string(),
            "O valor deve ser um inteiro positivo."
        );
    }

    #[test]
    fn test_deposit_requires_date_then_time() {
        let mut form = DepositForm {
            amount: 1000,
            ..Default::default()
        };
        assert_eq!(form.to_request("d"), Err(TransactionError::MissingDepositDate));
        form.date = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(form.to_request("d"), Err(TransactionError::MissingDepositTime));
        form.time = "25:99".into();
        assert_eq!(form.to_request("d"), Err(TransactionError::InvalidDepositTime));
        form.time = "14:30".into();
        let req = form.to_request("d").unwrap();
        assert_eq!(req.deposit_date, "2024-03-15T14:30:00");
        assert_eq!(req.category, TransactionCategory::Deposit);
        assert_eq!(req.bank, None);
    }

    #[test]
    fn test_company_balance_accepts_bare_number() {
        let wrapped: CompanyBalance = serde_json::from_str(r#"{"balance":123456}"#).unwrap();
        let bare: CompanyBalance = serde_json::from_str("123456").unwrap();
        assert_eq!(wrapped.cents(), 123456);
        assert_eq!(bare, wrapped);
    }

    #[test]
    fn test_edit_date_keeps_time_of_day() {
        let t: Transaction = serde_json::from_str(
            r#"{"_id":"t1","transactionType":"EXIT","category":"EXPENSE","amount":500,
                "userId":"u1","createdAt":"2024-03-15T13:45:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(
            UpdateTransactionDate::default().to_request(&t),
            Err(TransactionError::MissingDate)
        );
        let picked = UpdateTransactionDate {
            date: NaiveDate::from_ymd_opt(2024, 4, 1),
        };
        let req = picked.to_request(&t).unwrap();
        assert_eq!(req.created_at, "2024-04-01T13:45:00");
        assert_eq!(req.amount, 500);
        assert_eq!(t.custom_category_label(), "-");
    }
}
