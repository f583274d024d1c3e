pub mod deposit_dialog;
pub mod expense;
pub mod expense_dialog;
pub mod finance;
pub mod transaction_dialog;
pub mod transactions_table;
pub mod update_date_dialog;
