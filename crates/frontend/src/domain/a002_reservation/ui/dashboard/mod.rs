//! Reservation Dashboard UI Module
//!
//! - model.rs: tabs, form schemas and reservation requests
//! - view_model.rs: panel state, available rooms and async commands
//! - view.rs: Leptos components

mod model;
mod view;
mod view_model;

pub use view::ReservationDashboard;
