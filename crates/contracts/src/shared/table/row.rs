use std::cmp::Ordering;

/// Row contract for tables whose sorting, filtering and search run on the client.
///
/// `column_id` is the id of a column descriptor. Unknown ids return `None`
/// from `cell_text` and `Ordering::Equal` from `compare_by_column`.
pub trait TableRow {
    /// Text used for global search, set-membership filters and facet values.
    fn cell_text(&self, column_id: &str) -> Option<String>;

    /// Comparator for sorting by a column.
    fn compare_by_column(&self, other: &Self, column_id: &str) -> Ordering;

    /// Case-insensitive substring match over the given columns.
    fn matches_search(&self, query: &str, column_ids: &[&str]) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        column_ids.iter().any(|id| {
            self.cell_text(id)
                .map(|text| text.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
    }
}

/// Case-insensitive text comparison used by most `compare_by_column` impls.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Total order over `f64` columns; NaN sorts last.
pub fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}
