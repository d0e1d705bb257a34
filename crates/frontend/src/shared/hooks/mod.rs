pub mod binding;
pub mod use_client_pagination;
pub mod use_server_pagination;

pub use binding::{PaginationBinding, PaginationHandlers};
pub use use_client_pagination::use_client_pagination;
pub use use_server_pagination::{use_server_pagination, ServerPagination};
