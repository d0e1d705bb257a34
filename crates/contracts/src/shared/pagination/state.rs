use serde::{Deserialize, Serialize};

/// Pagination state shared by the client and server paginators.
///
/// `page_index` is 0-based. `total_records` and `page_count` are optional:
/// a server-side caller may know only one of them (or neither before the
/// first load finishes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: usize,
    #[serde(default)]
    pub total_records: Option<usize>,
    #[serde(default)]
    pub page_count: Option<usize>,
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: normalize_page_size(page_size),
            total_records: None,
            page_count: None,
        }
    }

    pub fn with_total_records(mut self, total_records: usize) -> Self {
        self.total_records = Some(total_records);
        self
    }

    /// Number of rows that precede the current page.
    pub fn offset(&self) -> usize {
        self.page_index.saturating_mul(self.page_size)
    }

    /// Slice bounds of the current page inside a list of `len` rows.
    ///
    /// Out-of-range pages yield an empty range at the end of the list.
    pub fn page_range(&self, len: usize) -> std::ops::Range<usize> {
        let start = self.offset().min(len);
        let end = start.saturating_add(self.page_size).min(len);
        start..end
    }

    /// `true` when `page_index` lies inside `[0, page_count - 1]`.
    ///
    /// Always `true` while `page_count` is unknown.
    pub fn is_in_range(&self) -> bool {
        match self.page_count {
            Some(0) => self.page_index == 0,
            Some(count) => self.page_index < count,
            None => true,
        }
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes are positive; zero is clamped to one.
pub fn normalize_page_size(page_size: usize) -> usize {
    page_size.max(1)
}

/// `ceil(total_records / page_size)` with a zero-safe divisor.
pub fn pages_for(total_records: usize, page_size: usize) -> usize {
    total_records.div_ceil(normalize_page_size(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_on_first_page() {
        let state = PaginationState::new(25);
        assert_eq!(state.page_index, 0);
        assert_eq!(state.page_size, 25);
        assert_eq!(state.total_records, None);
        assert_eq!(state.page_count, None);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        assert_eq!(PaginationState::new(0).page_size, 1);
        assert_eq!(pages_for(7, 0), 7);
    }

    #[test]
    fn test_page_range() {
        let mut state = PaginationState::new(10).with_total_records(25);
        assert_eq!(state.page_range(25), 0..10);
        state.page_index = 2;
        assert_eq!(state.page_range(25), 20..25);
        state.page_index = 5;
        assert_eq!(state.page_range(25), 25..25);
    }

    #[test]
    fn test_pages_for() {
        assert_eq!(pages_for(0, 10), 0);
        assert_eq!(pages_for(10, 10), 1);
        assert_eq!(pages_for(11, 10), 2);
        assert_eq!(pages_for(25, 10), 3);
    }

    #[test]
    fn test_is_in_range() {
        let mut state = PaginationState::new(10);
        state.page_count = Some(3);
        state.page_index = 2;
        assert!(state.is_in_range());
        state.page_index = 3;
        assert!(!state.is_in_range());
        state.page_count = None;
        assert!(state.is_in_range());
    }
}
