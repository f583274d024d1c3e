pub mod a001_customer;
pub mod a002_product;
pub mod a003_sale;
pub mod a004_transaction;
pub mod a005_debt;
pub mod a006_supplier;
pub mod a007_bank_account;
pub mod a008_notification;
