use serde::{Deserialize, Serialize};

/// Bottle size sold and stocked by the distributor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "P3")]
    P3,
    #[serde(rename = "P13")]
    P13,
    #[serde(rename = "P20")]
    P20,
    #[serde(rename = "P45")]
    P45,
}

impl ProductType {
    /// Wire code used by the API
    pub fn code(&self) -> &'static str {
        match self {
            ProductType::P3 => "P3",
            ProductType::P13 => "P13",
            ProductType::P20 => "P20",
            ProductType::P45 => "P45",
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.code()
    }

    /// Every size tracked in stock
    pub fn all() -> Vec<ProductType> {
        vec![
            ProductType::P3,
            ProductType::P13,
            ProductType::P20,
            ProductType::P45,
        ]
    }

    /// Sizes offered in the sale dialog
    pub fn sellable() -> Vec<ProductType> {
        vec![ProductType::P13, ProductType::P20, ProductType::P45]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "P3" => Some(ProductType::P3),
            "P13" => Some(ProductType::P13),
            "P20" => Some(ProductType::P20),
            "P45" => Some(ProductType::P45),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_wire_format() {
        for t in ProductType::all() {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.code()));
            assert_eq!(ProductType::from_code(t.code()), Some(t));
        }
    }

    #[test]
    fn test_sellable_excludes_p3() {
        assert!(!ProductType::sellable().contains(&ProductType::P3));
        assert_eq!(ProductType::from_code(""), None);
    }
}
