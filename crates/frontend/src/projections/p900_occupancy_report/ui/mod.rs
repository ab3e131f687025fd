mod reports;

pub use reports::Reports;
