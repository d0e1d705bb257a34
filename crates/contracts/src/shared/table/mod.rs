pub mod error;
pub mod filters;
pub mod row;
pub mod row_model;
pub mod sorting;
pub mod status;
pub mod visibility;

pub use error::{validate_column_ids, TableError};
pub use filters::ColumnFilters;
pub use row::TableRow;
pub use row_model::RowQuery;
pub use sorting::{ColumnSort, SortDirection, SortingState};
pub use status::TableStatus;
pub use visibility::ColumnVisibility;
