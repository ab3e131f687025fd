//! Wire contracts between the StayMaster front-end and the reservation backend.

pub mod domain;
pub mod projections;
pub mod shared;
pub mod system;
