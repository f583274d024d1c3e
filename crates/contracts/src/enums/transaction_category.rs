use serde::{Deserialize, Serialize};

use super::TransactionType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionCategory {
    Deposit,
    Sale,
    Expense,
    /// Free-text category, requires `customCategory`
    Custom,
    Income,
    Withdraw,
}

impl TransactionCategory {
    pub fn code(&self) -> &'static str {
        match self {
            TransactionCategory::Deposit => "DEPOSIT",
            TransactionCategory::Sale => "SALE",
            TransactionCategory::Expense => "EXPENSE",
            TransactionCategory::Custom => "CUSTOM",
            TransactionCategory::Income => "INCOME",
            TransactionCategory::Withdraw => "WITHDRAW",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TransactionCategory::Deposit => "Depósito",
            TransactionCategory::Sale => "Venda",
            TransactionCategory::Expense => "Despesa",
            TransactionCategory::Custom => "Personalizado",
            TransactionCategory::Income => "Entrada",
            TransactionCategory::Withdraw => "Saída",
        }
    }

    /// Direction implied by a manually entered category
    pub fn direction(&self) -> TransactionType {
        match self {
            TransactionCategory::Income
            | TransactionCategory::Deposit
            | TransactionCategory::Sale => TransactionType::Entry,
            TransactionCategory::Withdraw
            | TransactionCategory::Expense
            | TransactionCategory::Custom => TransactionType::Exit,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "DEPOSIT" => Some(TransactionCategory::Deposit),
            "SALE" => Some(TransactionCategory::Sale),
            "EXPENSE" => Some(TransactionCategory::Expense),
            "CUSTOM" => Some(TransactionCategory::Custom),
            "INCOME" => Some(TransactionCategory::Income),
            "WITHDRAW" => Some(TransactionCategory::Withdraw),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_category() {
        assert_eq!(TransactionCategory::Income.direction(), TransactionType::Entry);
        assert_eq!(TransactionCategory::Withdraw.direction(), TransactionType::Exit);
        assert_eq!(TransactionCategory::Custom.direction(), TransactionType::Exit);
    }

    #[test]
    fn test_from_code_roundtrip() {
        let parsed: TransactionCategory = serde_json::from_str("\"WITHDRAW\"").unwrap();
        assert_eq!(parsed, TransactionCategory::Withdraw);
        assert_eq!(TransactionCategory::from_code("nope"), None);
    }
}
