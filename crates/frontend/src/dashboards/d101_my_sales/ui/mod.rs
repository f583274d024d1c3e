mod dashboard;
mod recent_sales;

pub use dashboard::MySalesDashboard;
