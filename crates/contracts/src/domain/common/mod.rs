//! Common helpers shared by all aggregates

pub mod validation;

pub use validation::{is_blank, parse_iso_date};
