pub mod d400_admin;
pub mod d401_customer;

pub use d400_admin::ui::AdminDashboard;
pub use d401_customer::ui::CustomerDashboard;
