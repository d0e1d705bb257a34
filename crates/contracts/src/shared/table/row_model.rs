//! Client-side row model: global search, column filters, sorting and page
//! slicing over a fully loaded dataset.

use super::filters::ColumnFilters;
use super::row::TableRow;
use super::sorting::SortingState;
use crate::shared::pagination::{PageRequest, PageResponse, PaginationState};
use std::cmp::Ordering;

/// Inputs of one row-model pass.
#[derive(Debug, Clone, Copy)]
pub struct RowQuery<'a> {
    pub search: &'a str,
    pub search_columns: &'a [&'a str],
    pub filters: &'a ColumnFilters,
    pub sorting: &'a SortingState,
}

/// Search, filter and sort. The result is the full filtered list, not a page.
pub fn apply<T: TableRow + Clone>(rows: &[T], query: &RowQuery<'_>) -> Vec<T> {
    let mut out: Vec<T> = rows
        .iter()
        .filter(|row| row.matches_search(query.search, query.search_columns))
        .filter(|row| query.filters.matches(*row))
        .cloned()
        .collect();
    sort_rows(&mut out, query.sorting);
    out
}

/// Stable multi-column sort in priority order.
pub fn sort_rows<T: TableRow>(rows: &mut [T], sorting: &SortingState) {
    if sorting.is_empty() {
        return;
    }
    rows.sort_by(|a, b| {
        for sort in sorting.entries() {
            let ord = a.compare_by_column(b, &sort.column_id);
            let ord = if sort.direction.is_ascending() {
                ord
            } else {
                ord.reverse()
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });
}

/// Rows of the current page.
pub fn page_slice<'a, T>(rows: &'a [T], state: &PaginationState) -> &'a [T] {
    &rows[state.page_range(rows.len())]
}

/// Answer a server-side page request from an in-memory dataset.
pub fn serve_page<T: TableRow + Clone>(
    rows: &[T],
    request: &PageRequest,
    search_columns: &[&str],
) -> PageResponse<T> {
    let filtered = apply(
        rows,
        &RowQuery {
            search: &request.search,
            search_columns,
            filters: &request.filters,
            sorting: &request.sorting,
        },
    );
    PageResponse {
        items: page_slice(&filtered, &request.pagination()).to_vec(),
        total_count: filtered.len(),
    }
}

/// Distinct `cell_text` values of a column, sorted, for filter menus.
pub fn facet_values<T: TableRow>(rows: &[T], column_id: &str) -> Vec<String> {
    let mut values: Vec<String> = rows
        .iter()
        .filter_map(|row| row.cell_text(column_id))
        .filter(|v| !v.is_empty())
        .collect();
    values.sort();
    values.dedup();
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::row::compare_text;
    use crate::shared::table::sorting::SortDirection;

    #[derive(Clone, Debug, PartialEq)]
    struct Site {
        name: &'static str,
        region: &'static str,
        crew: u32,
    }

    impl TableRow for Site {
        fn cell_text(&self, column_id: &str) -> Option<String> {
            match column_id {
                "name" => Some(self.name.to_string()),
                "region" => Some(self.region.to_string()),
                "crew" => Some(self.crew.to_string()),
                _ => None,
            }
        }

        fn compare_by_column(&self, other: &Self, column_id: &str) -> Ordering {
            match column_id {
                "name" => compare_text(self.name, other.name),
                "region" => compare_text(self.region, other.region),
                "crew" => self.crew.cmp(&other.crew),
                _ => Ordering::Equal,
            }
        }
    }

    fn sites() -> Vec<Site> {
        vec![
            Site { name: "Harbor Bridge", region: "North", crew: 40 },
            Site { name: "Airport Terminal", region: "South", crew: 120 },
            Site { name: "Riverside Tower", region: "North", crew: 75 },
            Site { name: "Metro Depot", region: "East", crew: 75 },
        ]
    }

    fn names(rows: &[Site]) -> Vec<&'static str> {
        rows.iter().map(|s| s.name).collect()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filters = ColumnFilters::new();
        let sorting = SortingState::new();
        let query = RowQuery {
            search: "TOWER",
            search_columns: &["name", "region"],
            filters: &filters,
            sorting: &sorting,
        };
        assert_eq!(names(&apply(&sites(), &query)), vec!["Riverside Tower"]);
    }

    #[test]
    fn test_filters_then_sorts() {
        let mut filters = ColumnFilters::new();
        filters.set("region", vec!["North".into()]);
        let sorting = SortingState::by("crew", SortDirection::Desc);
        let query = RowQuery {
            search: "",
            search_columns: &["name"],
            filters: &filters,
            sorting: &sorting,
        };
        assert_eq!(
            names(&apply(&sites(), &query)),
            vec!["Riverside Tower", "Harbor Bridge"]
        );
    }

    #[test]
    fn test_secondary_sort_breaks_ties() {
        let mut rows = sites();
        let mut sorting = SortingState::by("crew", SortDirection::Asc);
        sorting.set("name", SortDirection::Asc);
        sort_rows(&mut rows, &sorting);
        assert_eq!(
            names(&rows),
            vec!["Harbor Bridge", "Metro Depot", "Riverside Tower", "Airport Terminal"]
        );
    }

    #[test]
    fn test_page_slice() {
        let rows: Vec<u32> = (0..25).collect();
        let mut state = PaginationState::new(10);
        assert_eq!(page_slice(&rows, &state).len(), 10);
        state.page_index = 2;
        assert_eq!(page_slice(&rows, &state), &[20, 21, 22, 23, 24]);
        state.page_index = 9;
        assert!(page_slice(&rows, &state).is_empty());
    }

    #[test]
    fn test_serve_page_reports_filtered_total() {
        let mut filters = ColumnFilters::new();
        filters.set("region", vec!["North".into(), "East".into()]);
        let request = PageRequest {
            generation: 1,
            page_index: 1,
            page_size: 2,
            sorting: SortingState::by("name", SortDirection::Asc),
            filters,
            search: String::new(),
        };
        let response = serve_page(&sites(), &request, &["name"]);
        assert_eq!(response.total_count, 3);
        assert_eq!(names(&response.items), vec!["Riverside Tower"]);
    }

    #[test]
    fn test_facet_values() {
        assert_eq!(facet_values(&sites(), "region"), vec!["East", "North", "South"]);
        assert!(facet_values(&sites(), "unknown").is_empty());
    }
}
