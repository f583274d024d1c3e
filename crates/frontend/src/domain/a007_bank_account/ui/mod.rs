pub mod list;
pub mod transfer_dialog;
pub mod transfers;
