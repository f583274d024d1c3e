use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::PaymentMethod;

// ============================================================================
// Bank account
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub bank: String,
    /// Payment method codes routed to this account
    #[serde(default)]
    pub payments_associated: Vec<String>,
}

crate::impl_identified!(BankAccount);

impl BankAccount {
    /// Labels of the associated payment methods. Unknown codes are shown as sent.
    pub fn payment_labels(&self) -> Vec<String> {
        self.payments_associated
            .iter()
            .map(|code| {
                PaymentMethod::from_code(code)
                    .map(|m| m.display_name().to_string())
                    .unwrap_or_else(|| code.clone())
            })
            .collect()
    }
}

// ============================================================================
// Transfers between accounts
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRef {
    #[serde(default)]
    pub bank: String,
}

/// Row of `GET /account-transfer`. `value` is in cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountTransfer {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub origin_account_id: String,
    #[serde(default)]
    pub origin_account: AccountRef,
    #[serde(default)]
    pub destination_account_id: String,
    #[serde(default)]
    pub destination_account: AccountRef,
    #[serde(default)]
    pub value: i64,
    #[serde(default)]
    pub created_at: String,
}

crate::impl_identified!(AccountTransfer);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error("Selecione a conta de origem")]
    MissingOrigin,
    #[error("Selecione a conta de destino")]
    MissingDestination,
    #[error("As contas de origem e destino devem ser diferentes")]
    SameAccount,
    #[error("O valor deve ser maior que 0")]
    NonPositiveValue,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferForm {
    pub origin_account_id: String,
    pub destination_account_id: String,
    pub value: i64,
}

/// Body of `POST /account-transfer` and `PATCH /account-transfer/:id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub origin_account_id: String,
    pub destination_account_id: String,
    pub value: i64,
}

impl TransferForm {
    pub fn from_transfer(transfer: &AccountTransfer) -> Self {
        Self {
            origin_account_id: transfer.origin_account_id.clone(),
            destination_account_id: transfer.destination_account_id.clone(),
            value: transfer.value,
        }
    }

    pub fn to_request(&self) -> Result<TransferRequest, TransferError> {
        if self.origin_account_id.is_empty() {
            return Err(TransferError::MissingOrigin);
        }
        if self.destination_account_id.is_empty() {
            return Err(TransferError::MissingDestination);
        }
        if self.origin_account_id == self.destination_account_id {
            return Err(TransferError::SameAccount);
        }
        if self.value <= 0 {
            return Err(TransferError::NonPositiveValue);
        }
        Ok(TransferRequest {
            origin_account_id: self.origin_account_id.clone(),
            destination_account_id: self.destination_account_id.clone(),
            value: self.value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_labels() {
        let account: BankAccount = serde_json::from_str(
            r#"{"id":"b1","bank":"BB","paymentsAssociated":["PIX","CARTAO_CREDITO","VALE"]}"#,
        )
        .unwrap();
        assert_eq!(
            account.payment_labels(),
            vec!["Pix", "Cartão de crédito", "VALE"]
        );
    }

    #[test]
    fn test_transfer_form_rules() {
        let mut form = TransferForm::default();
        assert_eq!(form.to_request(), Err(TransferError::MissingOrigin));
        form.origin_account_id = "a".into();
        assert_eq!(form.to_request(), Err(TransferError::MissingDestination));
        form.destination_account_id = "a".into();
        assert_eq!(form.to_request(), Err(TransferError::SameAccount));
        form.destination_account_id = "b".into();
        assert_eq!(form.to_request(), Err(TransferError::NonPositiveValue));
        form.value = 5000;
        let json = serde_json::to_value(form.to_request().unwrap()).unwrap();
        assert_eq!(json["originAccountId"], "a");
        assert_eq!(json["destinationAccountId"], "b");
        assert_eq!(json["value"], 5000);
    }

    #[test]
    fn test_transfer_row_decodes_nested_banks() {
        let t: AccountTransfer = serde_json::from_str(
            r#"{"id":"t1","originAccount":{"bank":"BB"},"destinationAccount":{"bank":"Itaú"},
                "value":1500,"createdAt":"2024-03-15T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(t.origin_account.bank, "BB");
        assert_eq!(t.destination_account.bank, "Itaú");
        assert_eq!(TransferForm::from_transfer(&t).value, 1500);
    }
}
