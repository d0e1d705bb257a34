//! Pagination strategies. The client paginator owns page state for a fully
//! loaded list; the server paginator additionally holds the sorting and filter
//! state the caller's loader needs. Neither performs any fetching.

use super::pager::PagerView;
use super::request::PageRequest;
use super::state::{normalize_page_size, PaginationState};
use crate::shared::table::{ColumnFilters, SortingState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaginationMode {
    /// Slicing, sorting and filtering run over the in-memory list.
    Client,
    /// Rows arrive already paged, sorted and filtered by an external loader.
    Server,
}

/// Handler set shared by both strategies.
pub trait Paginator {
    fn state(&self) -> PaginationState;

    fn mode(&self) -> PaginationMode;

    /// Sets the page index. Bounds are the caller's responsibility.
    fn set_page(&mut self, page_index: usize);

    /// Sets the page size and returns to the first page.
    fn set_page_size(&mut self, page_size: usize);

    fn pager(&self) -> PagerView {
        PagerView::compute(&self.state(), self.mode())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientPaginator {
    state: PaginationState,
}

impl ClientPaginator {
    pub fn new(data_len: usize, page_size: usize) -> Self {
        Self {
            state: PaginationState::new(page_size).with_total_records(data_len),
        }
    }

    /// Record the current list length. A changed length resets to page 0.
    ///
    /// Returns `true` when the state changed.
    pub fn sync_data_len(&mut self, data_len: usize) -> bool {
        if self.state.total_records == Some(data_len) {
            return false;
        }
        self.state.total_records = Some(data_len);
        self.state.page_index = 0;
        true
    }
}

impl Paginator for ClientPaginator {
    fn state(&self) -> PaginationState {
        self.state
    }

    fn mode(&self) -> PaginationMode {
        PaginationMode::Client
    }

    fn set_page(&mut self, page_index: usize) {
        self.state.page_index = page_index;
    }

    fn set_page_size(&mut self, page_size: usize) {
        self.state.page_size = normalize_page_size(page_size);
        self.state.page_index = 0;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerPaginator {
    state: PaginationState,
    sorting: SortingState,
    filters: ColumnFilters,
}

impl ServerPaginator {
    pub fn new(page_size: usize, total_records: Option<usize>, page_count: Option<usize>) -> Self {
        let mut state = PaginationState::new(page_size);
        state.total_records = total_records;
        state.page_count = page_count;
        Self {
            state,
            sorting: SortingState::new(),
            filters: ColumnFilters::new(),
        }
    }

    /// Mirror the totals reported by the latest load.
    ///
    /// A page left beyond the new `page_count` moves to the last page.
    /// Returns `true` when the state changed.
    pub fn sync_totals(&mut self, total_records: Option<usize>, page_count: Option<usize>) -> bool {
        if self.state.total_records == total_records && self.state.page_count == page_count {
            return false;
        }
        self.state.total_records = total_records;
        self.state.page_count = page_count;
        if !self.state.is_in_range() {
            self.state.page_index = page_count.unwrap_or(0).saturating_sub(1);
        }
        true
    }

    pub fn sorting(&self) -> &SortingState {
        &self.sorting
    }

    pub fn column_filters(&self) -> &ColumnFilters {
        &self.filters
    }

    /// Overwrites the sorting state. Does not touch the page.
    pub fn set_sorting(&mut self, sorting: SortingState) {
        self.sorting = sorting;
    }

    /// Overwrites the column filters. Does not touch the page.
    pub fn set_column_filters(&mut self, filters: ColumnFilters) {
        self.filters = filters;
    }

    /// Snapshot the current page, sorting and filters as a loader request.
    ///
    /// `generation` comes from the caller's `RequestGeneration`.
    pub fn request(&self, generation: u64, search: &str) -> PageRequest {
        PageRequest {
            generation,
            page_index: self.state.page_index,
            page_size: self.state.page_size,
            sorting: self.sorting.clone(),
            filters: self.filters.clone(),
            search: search.trim().to_string(),
        }
    }
}

impl Paginator for ServerPaginator {
    fn state(&self) -> PaginationState {
        self.state
    }

    fn mode(&self) -> PaginationMode {
        PaginationMode::Server
    }

    fn set_page(&mut self, page_index: usize) {
        self.state.page_index = page_index;
    }

    fn set_page_size(&mut self, page_size: usize) {
        self.state.page_size = normalize_page_size(page_size);
        self.state.page_index = 0;
    }
}
