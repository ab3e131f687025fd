//! Travel Company Dashboard UI Module
//!
//! Only block booking creation is live; viewing and cancelling block
//! bookings are shown as disabled tabs.

mod model;
mod view;
mod view_model;

pub use view::TravelDashboard;
