mod dashboard;

pub use dashboard::CustomerDashboard;
