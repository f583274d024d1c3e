use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::enums::{ProductStatus, ProductType};
use crate::shared::validation::validate_fields;

// ============================================================================
// Aggregate
// ============================================================================

/// One stock line: a bottle size in a given condition.
/// `price` is in cents. Stock changes are server-side only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub status: ProductStatus,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub quantity: i64,
}

crate::impl_identified!(Product);

/// Products fetched for a sale, looked up by `(type, status)`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCatalog {
    items: Vec<Product>,
}

impl ProductCatalog {
    pub fn new(items: Vec<Product>) -> Self {
        Self { items }
    }

    pub fn find(&self, product_type: ProductType, status: ProductStatus) -> Option<&Product> {
        self.items
            .iter()
            .find(|p| p.product_type == product_type && p.status == status)
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ============================================================================
// Stock adjustment
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StockError {
    #[error("Insira um número")]
    NotANumber,
    #[error("{0}")]
    Invalid(String),
    #[error("O tipo do produto deve ser selecionado")]
    MissingType,
    #[error("A quantidade deve ser maior que 0")]
    NothingToCollect,
    #[error("Produto não encontrado no estoque")]
    ProductNotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockDirection {
    Increase,
    Decrease,
}

impl StockDirection {
    pub fn path(&self, product_id: &str) -> String {
        match self {
            StockDirection::Increase => format!("/products/{}/increase", product_id),
            StockDirection::Decrease => format!("/products/{}/decrease", product_id),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StockDirection::Increase => "Adicionar",
            StockDirection::Decrease => "Remover",
        }
    }
}

/// Body of `PATCH /products/:id/increase|decrease`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct StockAdjustment {
    #[validate(range(min = 0, message = "Insira um número maior ou igual a 0"))]
    pub quantity: i64,
}

impl StockAdjustment {
    pub fn parse(input: &str) -> Result<Self, StockError> {
        let quantity: i64 = input.trim().parse().map_err(|_| StockError::NotANumber)?;
        let adjustment = Self { quantity };
        validate_fields(&adjustment).map_err(|errors| {
            StockError::Invalid(errors.first().unwrap_or_default().to_string())
        })?;
        Ok(adjustment)
    }
}

/// Empty bottles brought back by a deliveryman
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectForm {
    pub product_type: Option<ProductType>,
    pub quantity: i64,
}

impl CollectForm {
    /// Resolves the EMPTY stock line to increase
    pub fn resolve(&self, catalog: &ProductCatalog) -> Result<(String, StockAdjustment), StockError> {
        let product_type = self.product_type.ok_or(StockError::MissingType)?;
        if self.quantity <= 0 {
            return Err(StockError::NothingToCollect);
        }
        let product = catalog
            .find(product_type, ProductStatus::Empty)
            .ok_or(StockError::ProductNotFound)?;
        Ok((
            product.id.clone(),
            StockAdjustment {
                quantity: self.quantity,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ProductCatalog {
        ProductCatalog::new(vec![
            Product {
                id: "p13-empty".into(),
                product_type: ProductType::P13,
                status: ProductStatus::Empty,
                price: 11000,
                quantity: 4,
            },
            Product {
                id: "p13-full".into(),
                product_type: ProductType::P13,
                status: ProductStatus::Full,
                price: 32000,
                quantity: 2,
            },
        ])
    }

    #[test]
    fn test_catalog_lookup_by_type_and_status() {
        let c = catalog();
        assert_eq!(c.find(ProductType::P13, ProductStatus::Full).map(|p| p.price), Some(32000));
        assert!(c.find(ProductType::P45, ProductStatus::Full).is_none());
    }

    #[test]
    fn test_stock_adjustment_parse() {
        assert_eq!(StockAdjustment::parse(" 3 "), Ok(StockAdjustment { quantity: 3 }));
        assert_eq!(StockAdjustment::parse("0"), Ok(StockAdjustment { quantity: 0 }));
        assert_eq!(
            StockAdjustment::parse("-1"),
            Err(StockError::Invalid("Insira um número maior ou igual a 0".into()))
        );
        assert_eq!(StockAdjustment::parse("x"), Err(StockError::NotANumber));
    }

    #[test]
    fn test_direction_paths() {
        assert_eq!(StockDirection::Increase.path("a"), "/products/a/increase");
        assert_eq!(StockDirection::Decrease.path("a"), "/products/a/decrease");
    }

    #[test]
    fn test_collect_targets_empty_stock() {
        let form = CollectForm {
            product_type: Some(ProductType::P13),
            quantity: 2,
        };
        let (id, adj) = form.resolve(&catalog()).unwrap();
        assert_eq!(id, "p13-empty");
        assert_eq!(adj.quantity, 2);
    }

    #[test]
    fn test_collect_errors() {
        let c = catalog();
        assert_eq!(CollectForm::default().resolve(&c), Err(StockError::MissingType));
        let zero = CollectForm { product_type: Some(ProductType::P13), quantity: 0 };
        assert_eq!(zero.resolve(&c), Err(StockError::NothingToCollect));
        let missing = CollectForm { product_type: Some(ProductType::P20), quantity: 1 };
        assert_eq!(missing.resolve(&c), Err(StockError::ProductNotFound));
    }

    #[test]
    fn test_product_wire_shape() {
        let p: Product = serde_json::from_str(
            r#"{"id":"x","type":"P45","status":"COMODATO","price":50000,"quantity":1}"#,
        )
        .unwrap();
        assert_eq!(p.product_type, ProductType::P45);
        assert_eq!(p.status, ProductStatus::Comodato);
    }
}
