//! Room Dashboard UI Module
//!
//! - model.rs: tabs, form schemas and the requests they bind to
//! - view_model.rs: panel state and async commands
//! - view.rs: Leptos components

mod model;
mod view;
mod view_model;

pub use view::RoomDashboard;
