mod dashboard;

pub use dashboard::SalesIndicatorsDashboard;
