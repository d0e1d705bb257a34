use super::state::{pages_for, PaginationState};
use crate::shared::table::{ColumnFilters, SortingState};
use serde::{Deserialize, Serialize};

/// Parameters a server-side page hands to its loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Stamp used to discard responses that arrive after a newer request.
    pub generation: u64,
    pub page_index: usize,
    pub page_size: usize,
    #[serde(default)]
    pub sorting: SortingState,
    #[serde(default)]
    pub filters: ColumnFilters,
    #[serde(default)]
    pub search: String,
}

impl PageRequest {
    pub fn offset(&self) -> usize {
        self.page_index.saturating_mul(self.page_size)
    }

    pub fn pagination(&self) -> PaginationState {
        let mut state = PaginationState::new(self.page_size);
        state.page_index = self.page_index;
        state
    }
}

/// One page of rows plus the size of the whole filtered result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}

impl<T> PageResponse<T> {
    pub fn page_count(&self, page_size: usize) -> usize {
        pages_for(self.total_count, page_size)
    }
}

/// Monotonic request counter. Only the latest issued generation is current.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new generation, invalidating every earlier one.
    pub fn next(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_generation_is_current() {
        let mut generation = RequestGeneration::new();
        let first = generation.next();
        let second = generation.next();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
        assert_eq!(second, 2);
    }

    #[test]
    fn test_response_page_count() {
        let response = PageResponse {
            items: vec![1, 2, 3],
            total_count: 23,
        };
        assert_eq!(response.page_count(10), 3);
        assert_eq!(response.page_count(0), 23);
    }

    #[test]
    fn test_request_wire_shape() {
        let mut filters = ColumnFilters::new();
        filters.set("status", vec!["Approved".into()]);
        let request = PageRequest {
            generation: 4,
            page_index: 0,
            page_size: 20,
            sorting: SortingState::by("amount", crate::shared::table::SortDirection::Desc),
            filters,
            search: "rebar".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["sorting"][0]["column_id"], "amount");
        assert_eq!(json["filters"]["status"][0], "Approved");

        // older clients omit sorting, filters and search
        let minimal: PageRequest =
            serde_json::from_str(r#"{"generation":1,"page_index":2,"page_size":10}"#).unwrap();
        assert!(minimal.sorting.is_empty());
        assert!(minimal.filters.is_empty());
        assert_eq!(minimal.offset(), 20);
    }

    #[test]
    fn test_request_offset() {
        let request = PageRequest {
            generation: 1,
            page_index: 3,
            page_size: 20,
            sorting: SortingState::new(),
            filters: ColumnFilters::new(),
            search: String::new(),
        };
        assert_eq!(request.offset(), 60);
        assert_eq!(request.pagination().page_range(100), 60..80);
    }
}
