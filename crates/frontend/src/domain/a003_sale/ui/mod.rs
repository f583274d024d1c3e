pub mod list;
pub mod sale_dialog;
