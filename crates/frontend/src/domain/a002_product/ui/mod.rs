pub mod collect;
pub mod list;
pub mod stock_dialog;
