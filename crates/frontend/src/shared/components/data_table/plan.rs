//! Render decisions of `DataTable`, kept free of views.

use contracts::shared::pagination::PaginationMode;
use contracts::shared::table::{SortingState, TableStatus};

/// What the table body shows for one status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyPlan {
    /// Placeholder grid while a load is in flight.
    Skeleton { rows: usize, columns: usize },
    /// One full-width row.
    Message { text: String, is_error: bool },
    /// The current page of rows.
    Rows,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePlan {
    pub body: BodyPlan,
    pub show_footer: bool,
}

impl TablePlan {
    pub fn of(status: &TableStatus, page_size: usize, column_count: usize, empty_text: &str) -> Self {
        let body = match status {
            TableStatus::Loading => BodyPlan::Skeleton {
                rows: status.skeleton_rows(page_size),
                columns: column_count.max(1),
            },
            TableStatus::Error(message) => BodyPlan::Message {
                text: message.clone(),
                is_error: true,
            },
            _ if status.shows_rows() => BodyPlan::Rows,
            _ => BodyPlan::Message {
                text: empty_text.to_string(),
                is_error: false,
            },
        };
        TablePlan {
            body,
            show_footer: status.shows_pagination(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.body, BodyPlan::Skeleton { .. })
    }
}

/// A caller-supplied message wins over the configured default.
pub fn resolve_message(supplied: Option<String>, default: &str) -> String {
    supplied.unwrap_or_else(|| default.to_string())
}

/// Page to request after the search text or the filter set changed.
///
/// Client tables go back to the first page; server tables leave the decision
/// to the page that owns the loader. The first evaluation is the mount, not
/// a change.
pub fn page_after_query_change(mode: PaginationMode, first_run: bool) -> Option<usize> {
    match mode {
        PaginationMode::Client if !first_run => Some(0),
        _ => None,
    }
}

/// Sorting a server table must report at mount so the loader sorts the way
/// the header arrows show.
pub fn initial_sorting_to_report(mode: PaginationMode, initial: &SortingState) -> Option<SortingState> {
    (mode == PaginationMode::Server && !initial.is_empty()).then(|| initial.clone())
}
