//! Navigation arithmetic behind the pagination controls.

use super::paginator::PaginationMode;
use super::state::{pages_for, PaginationState};
use crate::shared::table::TableError;

/// Derived, read-only view of a `PaginationState` for the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerView {
    pub total_pages: usize,
    /// 1-based page number shown to the user.
    pub current_page: usize,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

impl PagerView {
    pub fn compute(state: &PaginationState, mode: PaginationMode) -> Self {
        let records = state.total_records.unwrap_or(0);
        let total_pages = match mode {
            PaginationMode::Server => state
                .page_count
                .unwrap_or_else(|| pages_for(records, state.page_size)),
            PaginationMode::Client => pages_for(records, state.page_size),
        };
        let current_page = state.page_index + 1;
        let can_go_next = match mode {
            PaginationMode::Server => current_page < total_pages,
            PaginationMode::Client => total_pages > 0 && state.page_index < total_pages - 1,
        };

        Self {
            total_pages,
            current_page,
            can_go_previous: state.page_index > 0,
            can_go_next,
        }
    }

    /// Index of the last page, `None` when there are no pages.
    pub fn last_page_index(&self) -> Option<usize> {
        self.total_pages.checked_sub(1)
    }

    /// Pager caption, e.g. `Page 2 of 3 (25 records)`.
    pub fn caption(&self, total_records: usize) -> String {
        format!(
            "Page {} of {} ({} records)",
            self.current_page,
            self.total_pages.max(1),
            total_records
        )
    }
}

/// Parse a 1-based page number typed by the user into a page index.
pub fn parse_page_input(input: &str, total_pages: usize) -> Result<usize, TableError> {
    let trimmed = input.trim();
    let page: usize = trimmed
        .parse()
        .map_err(|_| TableError::InvalidPageInput(trimmed.to_string()))?;
    if page == 0 || page > total_pages {
        return Err(TableError::PageOutOfRange { page, total_pages });
    }
    Ok(page - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(page_index: usize, page_size: usize, total: usize) -> PaginationState {
        let mut state = PaginationState::new(page_size).with_total_records(total);
        state.page_index = page_index;
        state
    }

    #[test]
    fn test_client_total_pages_is_ceil() {
        let view = PagerView::compute(&at(0, 10, 25), PaginationMode::Client);
        assert_eq!(view.total_pages, 3);
        let view = PagerView::compute(&at(0, 10, 30), PaginationMode::Client);
        assert_eq!(view.total_pages, 3);
    }

    #[test]
    fn test_server_prefers_page_count() {
        let mut state = at(0, 10, 25);
        state.page_count = Some(7);
        assert_eq!(PagerView::compute(&state, PaginationMode::Server).total_pages, 7);
        // client mode ignores page_count
        assert_eq!(PagerView::compute(&state, PaginationMode::Client).total_pages, 3);
    }

    #[test]
    fn test_server_without_page_count_falls_back() {
        let view = PagerView::compute(&at(0, 10, 25), PaginationMode::Server);
        assert_eq!(view.total_pages, 3);
    }

    #[test]
    fn test_last_page_of_25_items() {
        for mode in [PaginationMode::Client, PaginationMode::Server] {
            let view = PagerView::compute(&at(2, 10, 25), mode);
            assert_eq!(view.total_pages, 3);
            assert!(!view.can_go_next);
            assert!(view.can_go_previous);
        }
    }

    #[test]
    fn test_can_go_previous_tracks_page_index() {
        for page_index in 0..5 {
            let view = PagerView::compute(&at(page_index, 10, 100), PaginationMode::Client);
            assert_eq!(view.can_go_previous, page_index > 0);
        }
    }

    #[test]
    fn test_modes_agree_on_can_go_next() {
        for total in 0..40 {
            for page_index in 0..6 {
                let state = at(page_index, 10, total);
                let client = PagerView::compute(&state, PaginationMode::Client);
                let server = PagerView::compute(&state, PaginationMode::Server);
                assert_eq!(client.can_go_next, server.can_go_next, "total={total} page={page_index}");
            }
        }
    }

    #[test]
    fn test_empty_dataset_has_no_pages() {
        let view = PagerView::compute(&at(0, 10, 0), PaginationMode::Client);
        assert_eq!(view.total_pages, 0);
        assert!(!view.can_go_next);
        assert!(!view.can_go_previous);
        assert_eq!(view.last_page_index(), None);
        assert_eq!(view.caption(0), "Page 1 of 1 (0 records)");
    }

    #[test]
    fn test_parse_page_input() {
        assert_eq!(parse_page_input(" 3 ", 3), Ok(2));
        assert_eq!(
            parse_page_input("4", 3),
            Err(TableError::PageOutOfRange { page: 4, total_pages: 3 })
        );
        assert_eq!(
            parse_page_input("0", 3),
            Err(TableError::PageOutOfRange { page: 0, total_pages: 3 })
        );
        assert_eq!(
            parse_page_input("abc", 3),
            Err(TableError::InvalidPageInput("abc".to_string()))
        );
    }
}
