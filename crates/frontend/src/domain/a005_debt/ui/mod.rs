pub mod customer_debt;
pub mod customer_debts;
