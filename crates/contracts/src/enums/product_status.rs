use serde::{Deserialize, Serialize};

/// Condition of a gas bottle (vasilhame)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    Full,
    Empty,
    Comodato,
}

impl ProductStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ProductStatus::Full => "FULL",
            ProductStatus::Empty => "EMPTY",
            ProductStatus::Comodato => "COMODATO",
        }
    }

    /// Label of the sale kind chosen on a sale line
    pub fn sale_label(&self) -> &'static str {
        match self {
            ProductStatus::Full => "Vasilhame + gás",
            ProductStatus::Empty => "Troca de gás",
            ProductStatus::Comodato => "Comodato",
        }
    }

    /// Short label used on the stock screen
    pub fn stock_label(&self) -> &'static str {
        match self {
            ProductStatus::Full => "Cheio",
            ProductStatus::Empty => "Vazio",
            ProductStatus::Comodato => "Comodato",
        }
    }

    /// Label used in the sales table
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductStatus::Full => "Vasilhame cheio",
            ProductStatus::Empty => "Vasilhame vazio",
            ProductStatus::Comodato => "Comodato",
        }
    }

    pub fn all() -> Vec<ProductStatus> {
        vec![
            ProductStatus::Empty,
            ProductStatus::Full,
            ProductStatus::Comodato,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "FULL" => Some(ProductStatus::Full),
            "EMPTY" => Some(ProductStatus::Empty),
            "COMODATO" => Some(ProductStatus::Comodato),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_codes() {
        assert_eq!(serde_json::to_string(&ProductStatus::Comodato).unwrap(), "\"COMODATO\"");
        let parsed: ProductStatus = serde_json::from_str("\"EMPTY\"").unwrap();
        assert_eq!(parsed, ProductStatus::Empty);
        for s in ProductStatus::all() {
            assert_eq!(ProductStatus::from_code(s.code()), Some(s));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(ProductStatus::Empty.sale_label(), "Troca de gás");
        assert_eq!(ProductStatus::Full.stock_label(), "Cheio");
        assert_eq!(ProductStatus::Full.display_name(), "Vasilhame cheio");
    }
}
