pub mod order_status;
pub mod project_status;

pub use order_status::OrderStatus;
pub use project_status::ProjectStatus;
