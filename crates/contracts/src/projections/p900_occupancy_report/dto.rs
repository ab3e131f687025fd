use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query string shared by the occupancy and revenue reports
#[derive(Debug, Clone, Serialize)]
pub struct ReportQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OccupancyReport {
    pub date: String,
    pub total_occupancy: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RevenueReport {
    pub date: String,
    pub total_revenue: f64,
}
