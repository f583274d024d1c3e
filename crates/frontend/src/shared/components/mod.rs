pub mod confirm_dialog;
pub mod date_input;
pub mod money_input;
pub mod option_select;
pub mod pagination_controls;
pub mod stat_card;
pub mod table_cell_money;
