use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::a002_product::aggregate::ProductCatalog;
use crate::enums::{PaymentMethod, ProductStatus, ProductType, Role};
use crate::shared::api::NamedRef;
use crate::shared::pagination::PageRequest;
use crate::system::auth::SessionUser;

// ============================================================================
// Aggregate (read side)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleProduct {
    #[serde(default, alias = "_id", alias = "productId")]
    pub id: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub status: ProductStatus,
    #[serde(default)]
    pub quantity: i64,
    /// Unit price in cents
    #[serde(default, alias = "salePrice", alias = "price")]
    pub unit_price: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub customer: Option<NamedRef>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub deliveryman: Option<NamedRef>,
    #[serde(default)]
    pub deliveryman_id: Option<String>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub products: Vec<SaleProduct>,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub created_at: String,
}

crate::impl_identified!(Sale);

impl Sale {
    pub fn customer_name(&self) -> &str {
        self.customer.as_ref().map(|c| c.name.as_str()).unwrap_or("-")
    }

    pub fn deliveryman_name(&self) -> &str {
        self.deliveryman
            .as_ref()
            .map(|d| d.name.as_str())
            .unwrap_or("-")
    }
}

// ============================================================================
// Draft (composite form)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaleError {
    #[error("Selecione um cliente")]
    MissingCustomer,
    #[error("Produtos são necessários para consolidar a venda.")]
    NoProducts,
    #[error("O tipo do produto deve ser selecionado")]
    MissingType,
    #[error("O tipo de venda deve ser selecionado")]
    MissingStatus,
    #[error("O preço deve ser um valor válido.")]
    InvalidPrice,
    #[error("A quantidade deve ser um valor válido.")]
    InvalidQuantity,
    #[error("O entregador deve ser selecionado.")]
    MissingDeliveryman,
    #[error("Método de pagamento deve estar preenchido")]
    MissingPaymentMethod,
}

/// One line of a sale being composed. `price` is the unit price in cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleLine {
    pub product_type: Option<ProductType>,
    pub status: Option<ProductStatus>,
    pub price: i64,
    pub quantity: i64,
}

impl Default for SaleLine {
    fn default() -> Self {
        Self {
            product_type: None,
            status: Some(ProductStatus::Empty),
            price: 0,
            quantity: 1,
        }
    }
}

impl SaleLine {
    pub fn subtotal(&self) -> i64 {
        self.price.saturating_mul(self.quantity.max(0))
    }

    /// Re-reads the unit price once both halves of the lookup key are known.
    /// Returns false when the pair is not in the catalog.
    fn resolve_price(&mut self, catalog: &ProductCatalog) -> bool {
        let (Some(t), Some(s)) = (self.product_type, self.status) else {
            return true;
        };
        match catalog.find(t, s) {
            Some(product) => {
                self.price = product.price;
                if self.quantity == 0 {
                    self.quantity = 1;
                }
                true
            }
            None => false,
        }
    }

    /// Applies `change` only if the resulting pair can be priced
    fn select_with(&mut self, catalog: &ProductCatalog, change: impl FnOnce(&mut SaleLine)) {
        let mut candidate = self.clone();
        change(&mut candidate);
        if candidate.resolve_price(catalog) {
            *self = candidate;
        }
    }
}

/// Sale under composition. Starts with one default line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleDraft {
    pub customer_id: String,
    pub deliveryman_id: String,
    pub payment_method: Option<PaymentMethod>,
    pub lines: Vec<SaleLine>,
}

impl Default for SaleDraft {
    fn default() -> Self {
        Self {
            customer_id: String::new(),
            deliveryman_id: String::new(),
            payment_method: None,
            lines: vec![SaleLine::default()],
        }
    }
}

impl SaleDraft {
    /// Draft prefilled from an existing sale, for editing
    pub fn from_sale(sale: &Sale) -> Self {
        Self {
            customer_id: sale
                .customer_id
                .clone()
                .or_else(|| sale.customer.as_ref().map(|c| c.id.clone()))
                .unwrap_or_default(),
            deliveryman_id: sale
                .deliveryman_id
                .clone()
                .or_else(|| sale.deliveryman.as_ref().map(|d| d.id.clone()))
                .unwrap_or_default(),
            payment_method: sale.payment_method,
            lines: sale
                .products
                .iter()
                .map(|p| SaleLine {
                    product_type: Some(p.product_type),
                    status: Some(p.status),
                    price: p.unit_price,
                    quantity: p.quantity,
                })
                .collect(),
        }
    }

    pub fn add_line(&mut self) {
        self.lines.push(SaleLine::default());
    }

    /// Out-of-range indices are ignored
    pub fn remove_line(&mut self, index: usize) {
        if index < self.lines.len() {
            self.lines.remove(index);
        }
    }

    pub fn select_type(&mut self, index: usize, product_type: ProductType, catalog: &ProductCatalog) {
        if let Some(line) = self.lines.get_mut(index) {
            line.select_with(catalog, |l| l.product_type = Some(product_type));
        }
    }

    pub fn select_status(&mut self, index: usize, status: ProductStatus, catalog: &ProductCatalog) {
        if let Some(line) = self.lines.get_mut(index) {
            line.select_with(catalog, |l| l.status = Some(status));
        }
    }

    pub fn set_price(&mut self, index: usize, cents: i64) {
        if let Some(line) = self.lines.get_mut(index) {
            line.price = cents;
        }
    }

    pub fn increment(&mut self, index: usize) {
        if let Some(line) = self.lines.get_mut(index) {
            line.quantity = line.quantity.saturating_add(1);
        }
    }

    /// Quantity never goes below zero
    pub fn decrement(&mut self, index: usize) {
        if let Some(line) = self.lines.get_mut(index) {
            line.quantity = (line.quantity - 1).max(0);
        }
    }

    /// Typed quantity; anything unparsable becomes 0, negatives clamp to 0
    pub fn set_quantity_input(&mut self, index: usize, input: &str) {
        if let Some(line) = self.lines.get_mut(index) {
            line.quantity = input.trim().parse::<i64>().unwrap_or(0).max(0);
        }
    }

    pub fn total(&self) -> i64 {
        self.lines.iter().map(SaleLine::subtotal).sum()
    }

    /// Fail-fast check; the first broken rule wins.
    pub fn validate(&self, role: Role) -> Result<(), SaleError> {
        if self.customer_id.trim().is_empty() {
            return Err(SaleError::MissingCustomer);
        }
        if self.lines.is_empty() {
            return Err(SaleError::NoProducts);
        }
        if self.lines.iter().any(|l| l.product_type.is_none()) {
            return Err(SaleError::MissingType);
        }
        if self.lines.iter().any(|l| l.status.is_none()) {
            return Err(SaleError::MissingStatus);
        }
        if self.lines.iter().any(|l| l.price < 0) {
            return Err(SaleError::InvalidPrice);
        }
        if self.lines.iter().any(|l| l.quantity < 0) {
            return Err(SaleError::InvalidQuantity);
        }
        if role == Role::Admin && self.deliveryman_id.trim().is_empty() {
            return Err(SaleError::MissingDeliveryman);
        }
        if self.payment_method.is_none() {
            return Err(SaleError::MissingPaymentMethod);
        }
        Ok(())
    }

    /// Validates and builds the request body. A deliveryman sells as himself.
    pub fn to_request(&self, user: &SessionUser) -> Result<SaleRequest, SaleError> {
        self.validate(user.role)?;
        let deliveryman_id = match user.role {
            Role::Admin => self.deliveryman_id.trim().to_string(),
            Role::Deliveryman => user.id.clone(),
        };
        let mut products = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            products.push(SaleLineRequest {
                product_type: line.product_type.ok_or(SaleError::MissingType)?,
                status: line.status.ok_or(SaleError::MissingStatus)?,
                price: line.price,
                quantity: line.quantity,
            });
        }
        Ok(SaleRequest {
            customer_id: self.customer_id.trim().to_string(),
            deliveryman_id,
            payment_method: self
                .payment_method
                .ok_or(SaleError::MissingPaymentMethod)?,
            products,
        })
    }
}

/// Body of `POST /sales` and `PUT /sales/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRequest {
    pub customer_id: String,
    pub deliveryman_id: String,
    pub payment_method: PaymentMethod,
    pub products: Vec<SaleLineRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleLineRequest {
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub status: ProductStatus,
    pub price: i64,
    pub quantity: i64,
}

// ============================================================================
// List query
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SaleOrderField {
    CreatedAt,
    Customer,
    Total,
    Deliveryman,
    PaymentMethod,
}

impl SaleOrderField {
    pub fn code(&self) -> &'static str {
        match self {
            SaleOrderField::CreatedAt => "createdAt",
            SaleOrderField::Customer => "customer",
            SaleOrderField::Total => "total",
            SaleOrderField::Deliveryman => "deliveryman",
            SaleOrderField::PaymentMethod => "paymentMethod",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn code(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "asc",
            OrderDirection::Desc => "desc",
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            OrderDirection::Asc => OrderDirection::Desc,
            OrderDirection::Desc => OrderDirection::Asc,
        }
    }
}

/// Filters of `GET /sales`. The search text matches both customer
/// and deliveryman names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleQuery {
    pub search: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub sale_type: Option<ProductStatus>,
    pub order_by: SaleOrderField,
    pub direction: OrderDirection,
    pub page: PageRequest,
}

pub const SALES_PER_PAGE: u32 = 10;

impl Default for SaleQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            start_date: None,
            end_date: None,
            sale_type: None,
            order_by: SaleOrderField::CreatedAt,
            direction: OrderDirection::Desc,
            page: PageRequest::first(SALES_PER_PAGE),
        }
    }
}

impl SaleQuery {
    /// Clicking the active column flips direction, another column starts ascending
    pub fn toggle_order(&mut self, field: SaleOrderField) {
        if self.order_by == field {
            self.direction = self.direction.flipped();
        } else {
            self.order_by = field;
            self.direction = OrderDirection::Asc;
        }
        self.page = PageRequest::first(self.page.items_per_page);
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("deliveryman", search.to_string()));
            pairs.push(("customer", search.to_string()));
        }
        if let Some(d) = self.start_date {
            pairs.push(("startDate", d.format("%Y-%m-%d").to_string()));
        }
        if let Some(d) = self.end_date {
            pairs.push(("endDate", d.format("%Y-%m-%d").to_string()));
        }
        if let Some(s) = self.sale_type {
            pairs.push(("saleSelectType", s.code().to_string()));
        }
        pairs.push(("orderByField", self.order_by.code().to_string()));
        pairs.push(("orderDirection", self.direction.code().to_string()));
        pairs.extend(self.page.query_pairs());
        pairs
    }
}

// ============================================================================
// Indicators
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesIndicators {
    #[serde(default)]
    pub total_sales: i64,
    #[serde(default)]
    pub total_per_day: Vec<DayTotal>,
    #[serde(default)]
    pub total_per_month: Vec<MonthTotal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTotal {
    pub created_at: String,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthTotal {
    pub year: i32,
    pub month: u32,
    pub total: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndicatorsQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub deliveryman_id: Option<String>,
}

impl IndicatorsQuery {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(d) = self.start_date {
            pairs.push(("startDate", d.format("%Y-%m-%d").to_string()));
        }
        if let Some(d) = self.end_date {
            pairs.push(("endDate", d.format("%Y-%m-%d").to_string()));
        }
        if let Some(id) = self.deliveryman_id.as_ref().filter(|id| !id.is_empty()) {
            pairs.push(("deliverymanId", id.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_product::aggregate::Product;

    fn catalog() -> ProductCatalog {
        ProductCatalog::new(vec![
            Product {
                id: "1".into(),
                product_type: ProductType::P13,
                status: ProductStatus::Empty,
                price: 11000,
                quantity: 10,
            },
            Product {
                id: "2".into(),
                product_type: ProductType::P13,
                status: ProductStatus::Full,
                price: 32000,
                quantity: 3,
            },
        ])
    }

    fn admin() -> SessionUser {
        SessionUser {
            id: "adm".into(),
            name: "Admin".into(),
            email: "adm@gas.com".into(),
            role: Role::Admin,
        }
    }

    fn deliveryman() -> SessionUser {
        SessionUser {
            id: "dlv".into(),
            name: "João".into(),
            email: "joao@gas.com".into(),
            role: Role::Deliveryman,
        }
    }

    fn complete_draft() -> SaleDraft {
        let mut d = SaleDraft::default();
        d.customer_id = "c1".into();
        d.deliveryman_id = "dlv".into();
        d.payment_method = Some(PaymentMethod::Pix);
        d.select_type(0, ProductType::P13, &catalog());
        d
    }

    #[test]
    fn test_default_draft_has_one_empty_exchange_line() {
        let d = SaleDraft::default();
        assert_eq!(d.lines, vec![SaleLine::default()]);
        assert_eq!(d.lines[0].status, Some(ProductStatus::Empty));
        assert_eq!(d.lines[0].quantity, 1);
    }

    #[test]
    fn test_selecting_type_and_status_resolves_price() {
        let mut d = SaleDraft::default();
        d.select_type(0, ProductType::P13, &catalog());
        assert_eq!(d.lines[0].price, 11000);
        d.select_status(0, ProductStatus::Full, &catalog());
        assert_eq!(d.lines[0].price, 32000);
    }

    #[test]
    fn test_selection_outside_catalog_is_ignored() {
        let mut d = complete_draft();
        d.select_status(0, ProductStatus::Full, &catalog());
        let before = d.lines[0].clone();
        assert_eq!(before.price, 32000);

        d.select_type(0, ProductType::P45, &catalog());
        assert_eq!(d.lines[0], before);
        d.select_status(0, ProductStatus::Comodato, &catalog());
        assert_eq!(d.lines[0], before);
        assert_eq!(d.lines[0].product_type, Some(ProductType::P13));
    }

    #[test]
    fn test_half_key_selection_is_kept() {
        let mut d = SaleDraft::default();
        d.lines[0].status = None;
        d.select_type(0, ProductType::P45, &catalog());
        assert_eq!(d.lines[0].product_type, Some(ProductType::P45));
        assert_eq!(d.lines[0].price, 0);
    }

    #[test]
    fn test_quantity_floor_and_clamp() {
        let mut d = SaleDraft::default();
        d.decrement(0);
        d.decrement(0);
        assert_eq!(d.lines[0].quantity, 0);
        d.increment(0);
        assert_eq!(d.lines[0].quantity, 1);
        d.set_quantity_input(0, "-5");
        assert_eq!(d.lines[0].quantity, 0);
        d.set_quantity_input(0, "abc");
        assert_eq!(d.lines[0].quantity, 0);
        d.set_quantity_input(0, " 7 ");
        assert_eq!(d.lines[0].quantity, 7);
    }

    #[test]
    fn test_add_and_remove_lines() {
        let mut d = complete_draft();
        d.add_line();
        d.add_line();
        d.select_status(2, ProductStatus::Full, &catalog());
        d.remove_line(1);
        assert_eq!(d.lines.len(), 2);
        assert_eq!(d.lines[1].status, Some(ProductStatus::Full));
        d.remove_line(10);
        assert_eq!(d.lines.len(), 2);
    }

    #[test]
    fn test_zero_lines_rejected() {
        let mut d = complete_draft();
        d.remove_line(0);
        let err = d.validate(Role::Admin).unwrap_err();
        assert_eq!(err.to_string(), "Produtos são necessários para consolidar a venda.");
        assert!(d.to_request(&admin()).is_err());
    }

    #[test]
    fn test_validation_order_is_fixed() {
        let mut d = SaleDraft::default();
        d.lines[0].status = None;
        d.lines[0].price = -1;
        d.lines[0].quantity = -1;
        assert_eq!(d.validate(Role::Admin), Err(SaleError::MissingCustomer));
        d.customer_id = "c1".into();
        assert_eq!(d.validate(Role::Admin), Err(SaleError::MissingType));
        d.lines[0].product_type = Some(ProductType::P13);
        assert_eq!(d.validate(Role::Admin), Err(SaleError::MissingStatus));
        d.lines[0].status = Some(ProductStatus::Full);
        assert_eq!(d.validate(Role::Admin), Err(SaleError::InvalidPrice));
        d.lines[0].price = 100;
        assert_eq!(d.validate(Role::Admin), Err(SaleError::InvalidQuantity));
        d.lines[0].quantity = 1;
        assert_eq!(d.validate(Role::Admin), Err(SaleError::MissingDeliveryman));
        d.deliveryman_id = "dlv".into();
        assert_eq!(d.validate(Role::Admin), Err(SaleError::MissingPaymentMethod));
        d.payment_method = Some(PaymentMethod::Dinheiro);
        assert_eq!(d.validate(Role::Admin), Ok(()));
    }

    #[test]
    fn test_deliveryman_not_required_for_deliveryman_role() {
        let mut d = complete_draft();
        d.deliveryman_id.clear();
        assert_eq!(d.validate(Role::Admin), Err(SaleError::MissingDeliveryman));
        assert_eq!(d.validate(Role::Deliveryman), Ok(()));
        let req = d.to_request(&deliveryman()).unwrap();
        assert_eq!(req.deliveryman_id, "dlv");
    }

    #[test]
    fn test_request_payload_shape() {
        let mut d = complete_draft();
        d.increment(0);
        assert_eq!(d.total(), 22000);
        let json = serde_json::to_value(d.to_request(&admin()).unwrap()).unwrap();
        assert_eq!(json["customerId"], "c1");
        assert_eq!(json["paymentMethod"], "PIX");
        assert_eq!(json["products"][0]["type"], "P13");
        assert_eq!(json["products"][0]["status"], "EMPTY");
        assert_eq!(json["products"][0]["price"], 11000);
        assert_eq!(json["products"][0]["quantity"], 2);
    }

    #[test]
    fn test_draft_from_sale() {
        let sale: Sale = serde_json::from_str(
            r#"{"id":"s1","customer":{"id":"c1","name":"Ana"},"deliveryman":{"id":"d1","name":"Zé"},
                "paymentMethod":"FIADO","total":22000,"createdAt":"2024-03-15T10:00:00.000Z",
                "products":[{"id":"p","type":"P13","status":"FULL","quantity":2,"unitPrice":11000}]}"#,
        )
        .unwrap();
        let d = SaleDraft::from_sale(&sale);
        assert_eq!(d.customer_id, "c1");
        assert_eq!(d.deliveryman_id, "d1");
        assert_eq!(d.payment_method, Some(PaymentMethod::Fiado));
        assert_eq!(d.lines[0].price, 11000);
        assert_eq!(sale.customer_name(), "Ana");
    }

    #[test]
    fn test_sale_query_pairs() {
        let mut q = SaleQuery::default();
        q.search = " ana ".into();
        q.start_date = NaiveDate::from_ymd_opt(2024, 3, 1);
        q.sale_type = Some(ProductStatus::Comodato);
        let pairs = q.query_pairs();
        assert!(pairs.contains(&("deliveryman", "ana".to_string())));
        assert!(pairs.contains(&("customer", "ana".to_string())));
        assert!(pairs.contains(&("startDate", "2024-03-01".to_string())));
        assert!(pairs.contains(&("saleSelectType", "COMODATO".to_string())));
        assert!(pairs.contains(&("itemsPerPage", "10".to_string())));
        assert!(!pairs.iter().any(|(k, _)| *k == "endDate"));
    }

    #[test]
    fn test_toggle_order_resets_page() {
        let mut q = SaleQuery::default();
        q.page = q.page.next();
        q.toggle_order(SaleOrderField::CreatedAt);
        assert_eq!(q.direction, OrderDirection::Asc);
        assert_eq!(q.page.page, 1);
        q.toggle_order(SaleOrderField::Total);
        assert_eq!(q.order_by, SaleOrderField::Total);
        assert_eq!(q.direction, OrderDirection::Asc);
    }
}
