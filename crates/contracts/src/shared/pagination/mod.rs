pub mod pager;
pub mod paginator;
pub mod request;
pub mod state;

pub use pager::{parse_page_input, PagerView};
pub use paginator::{ClientPaginator, PaginationMode, Paginator, ServerPaginator};
pub use request::{PageRequest, PageResponse, RequestGeneration};
pub use state::PaginationState;
