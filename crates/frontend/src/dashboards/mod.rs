pub mod d100_sales_indicators;
pub mod d101_my_sales;

pub use d100_sales_indicators::ui::SalesIndicatorsDashboard;
pub use d101_my_sales::ui::MySalesDashboard;
