use serde::{Deserialize, Serialize};

/// Direction of a ledger entry. Amounts are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Entry,
    Exit,
    Transfer,
}

impl TransactionType {
    pub fn code(&self) -> &'static str {
        match self {
            TransactionType::Entry => "ENTRY",
            TransactionType::Exit => "EXIT",
            TransactionType::Transfer => "TRANSFER",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TransactionType::Entry => "Entrada",
            TransactionType::Exit => "Saída",
            TransactionType::Transfer => "Transferência",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ENTRY" => Some(TransactionType::Entry),
            "EXIT" => Some(TransactionType::Exit),
            "TRANSFER" => Some(TransactionType::Transfer),
            _ => None,
        }
    }
}
