mod dashboard;

pub use dashboard::{DashboardCounts, DashboardSummary};
