mod dashboard;

pub use dashboard::{AdminDashboard, AdminPanel, AdminTab};
