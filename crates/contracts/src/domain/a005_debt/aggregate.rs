use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Supplier debt
// ============================================================================

/// Amount owed to a supplier. `amount` is in cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub supplier_id: Option<String>,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub paid: bool,
}

crate::impl_identified!(Debt);

impl Debt {
    /// `YYYY-MM-DD` part of the due date, if any
    pub fn due_day(&self) -> Option<NaiveDate> {
        let raw = self.due_date.as_deref()?;
        NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()
    }

    pub fn to_form(&self) -> DebtForm {
        DebtForm {
            amount: self.amount,
            due_date: self.due_day(),
            paid: self.paid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DebtError {
    #[error("Selecione um fornecedor")]
    MissingSupplier,
    #[error("O valor deve ser maior que 0")]
    NonPositiveAmount,
    #[error("A data de vencimento é obrigatória")]
    MissingDueDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebtForm {
    pub amount: i64,
    pub due_date: Option<NaiveDate>,
    pub paid: bool,
}

/// Body of `POST /debts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDebtRequest {
    pub supplier_id: String,
    pub amount: i64,
    pub due_date: String,
    pub paid: bool,
}

/// Body of `PATCH /debts/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDebtRequest {
    pub amount: i64,
    pub due_date: String,
    pub paid: bool,
}

impl DebtForm {
    fn checked(&self) -> Result<String, DebtError> {
        if self.amount <= 0 {
            return Err(DebtError::NonPositiveAmount);
        }
        let due = self.due_date.ok_or(DebtError::MissingDueDate)?;
        Ok(due.format("%Y-%m-%d").to_string())
    }

    pub fn to_create_request(&self, supplier_id: &str) -> Result<CreateDebtRequest, DebtError> {
        if supplier_id.trim().is_empty() {
            return Err(DebtError::MissingSupplier);
        }
        let due_date = self.checked()?;
        Ok(CreateDebtRequest {
            supplier_id: supplier_id.to_string(),
            amount: self.amount,
            due_date,
            paid: self.paid,
        })
    }

    pub fn to_update_request(&self) -> Result<UpdateDebtRequest, DebtError> {
        let due_date = self.checked()?;
        Ok(UpdateDebtRequest {
            amount: self.amount,
            due_date,
            paid: self.paid,
        })
    }
}

// ============================================================================
// Customer debt
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDebtSale {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub paid: bool,
}

/// Row of `GET /sales/customers-with-debts-total`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDebtSummary {
    pub customer_id: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub total_debt: i64,
    #[serde(default)]
    pub sales: Vec<CustomerDebtSale>,
}

impl CustomerDebtSummary {
    /// Sales still to be marked as paid. Marking is one-way: there is no unmark.
    pub fn unpaid_sale_ids(&self) -> Vec<String> {
        self.sales
            .iter()
            .filter(|s| !s.paid)
            .map(|s| s.id.clone())
            .collect()
    }

    pub fn is_settled(&self) -> bool {
        self.sales.iter().all(|s| s.paid)
    }
}

/// Path of `PATCH /sales/mark-as-paid/:id`
pub fn mark_as_paid_path(sale_id: &str) -> String {
    format!("/sales/mark-as-paid/{}", sale_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debt_form_requires_amount_then_date() {
        let mut form = DebtForm::default();
        assert_eq!(form.to_update_request(), Err(DebtError::NonPositiveAmount));
        form.amount = 15000;
        assert_eq!(form.to_update_request(), Err(DebtError::MissingDueDate));
        form.due_date = NaiveDate::from_ymd_opt(2024, 5, 10);
        let req = form.to_update_request().unwrap();
        assert_eq!(req.due_date, "2024-05-10");
        assert!(!req.paid);
    }

    #[test]
    fn test_create_debt_requires_supplier() {
        let form = DebtForm {
            amount: 100,
            due_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            paid: true,
        };
        assert_eq!(form.to_create_request(""), Err(DebtError::MissingSupplier));
        let json = serde_json::to_value(form.to_create_request("s1").unwrap()).unwrap();
        assert_eq!(json["supplierId"], "s1");
        assert_eq!(json["dueDate"], "2024-01-01");
        assert_eq!(json["paid"], true);
    }

    #[test]
    fn test_debt_to_form_reads_iso_date() {
        let debt: Debt = serde_json::from_str(
            r#"{"id":"d1","amount":2500,"dueDate":"2024-02-29T00:00:00.000Z","paid":false}"#,
        )
        .unwrap();
        let form = debt.to_form();
        assert_eq!(form.amount, 2500);
        assert_eq!(form.due_date, NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn test_customer_debt_unpaid_sales() {
        let summary: CustomerDebtSummary = serde_json::from_str(
            r#"{"customerId":"c1","customerName":"Ana","totalDebt":9000,
                "sales":[{"id":"s1","paid":true},{"id":"s2","paid":false}]}"#,
        )
        .unwrap();
        assert_eq!(summary.unpaid_sale_ids(), vec!["s2".to_string()]);
        assert!(!summary.is_settled());
        assert_eq!(mark_as_paid_path("s2"), "/sales/mark-as-paid/s2");
    }
}
