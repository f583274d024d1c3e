pub mod debt_dialog;
pub mod list;
pub mod supplier_debts;
