/// What the table body shows, derived from the caller's flags and the row count.
///
/// `Loading` wins over `Error` so a retry in flight shows skeletons instead of
/// the previous failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableStatus {
    Loading,
    Error(String),
    Empty,
    Populated,
}

impl TableStatus {
    pub fn resolve(is_loading: bool, error: Option<&str>, row_count: usize) -> Self {
        if is_loading {
            TableStatus::Loading
        } else if let Some(message) = error {
            TableStatus::Error(message.to_string())
        } else if row_count == 0 {
            TableStatus::Empty
        } else {
            TableStatus::Populated
        }
    }

    /// Number of placeholder rows rendered while loading.
    pub fn skeleton_rows(&self, page_size: usize) -> usize {
        match self {
            TableStatus::Loading => page_size,
            _ => 0,
        }
    }

    pub fn shows_rows(&self) -> bool {
        matches!(self, TableStatus::Populated)
    }

    /// Pagination controls are hidden only on error.
    pub fn shows_pagination(&self) -> bool {
        !matches!(self, TableStatus::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_renders_page_size_skeletons() {
        let status = TableStatus::resolve(true, None, 42);
        assert_eq!(status, TableStatus::Loading);
        assert_eq!(status.skeleton_rows(5), 5);
        assert!(!status.shows_rows());
    }

    #[test]
    fn test_loading_wins_over_error() {
        assert_eq!(
            TableStatus::resolve(true, Some("Network failure"), 0),
            TableStatus::Loading
        );
    }

    #[test]
    fn test_error_hides_rows_and_pagination() {
        let status = TableStatus::resolve(false, Some("Network failure"), 10);
        assert_eq!(status, TableStatus::Error("Network failure".to_string()));
        assert!(!status.shows_rows());
        assert!(!status.shows_pagination());
        assert_eq!(status.skeleton_rows(10), 0);
    }

    #[test]
    fn test_empty_and_populated() {
        let empty = TableStatus::resolve(false, None, 0);
        assert_eq!(empty, TableStatus::Empty);
        assert!(empty.shows_pagination());
        assert!(TableStatus::resolve(false, None, 3).shows_rows());
    }
}
