use super::row::TableRow;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column id -> accepted values (set membership).
///
/// A column without an entry is unfiltered; an entry is never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnFilters(BTreeMap<String, Vec<String>>);

impl ColumnFilters {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of filtered columns.
    pub fn active_count(&self) -> usize {
        self.0.len()
    }

    pub fn values(&self, column_id: &str) -> &[String] {
        self.0.get(column_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }

    /// Replaces the accepted values of a column. An empty list clears it.
    pub fn set(&mut self, column_id: impl Into<String>, mut values: Vec<String>) {
        let column_id = column_id.into();
        values.sort();
        values.dedup();
        if values.is_empty() {
            self.0.remove(&column_id);
        } else {
            self.0.insert(column_id, values);
        }
    }

    pub fn clear_column(&mut self, column_id: &str) {
        self.0.remove(column_id);
    }

    /// Adds the value if absent, removes it otherwise.
    pub fn toggle_value(&mut self, column_id: &str, value: &str) {
        let mut values = self.values(column_id).to_vec();
        match values.iter().position(|v| v == value) {
            Some(pos) => {
                values.remove(pos);
            }
            None => values.push(value.to_string()),
        }
        self.set(column_id, values);
    }

    pub fn is_selected(&self, column_id: &str, value: &str) -> bool {
        self.values(column_id).iter().any(|v| v == value)
    }

    /// A row passes when every filtered column's text is one of the accepted values.
    pub fn matches<T: TableRow>(&self, row: &T) -> bool {
        self.0.iter().all(|(column_id, accepted)| {
            row.cell_text(column_id)
                .map(|text| accepted.iter().any(|v| *v == text))
                .unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    struct Row(&'static str);

    impl TableRow for Row {
        fn cell_text(&self, column_id: &str) -> Option<String> {
            (column_id == "status").then(|| self.0.to_string())
        }

        fn compare_by_column(&self, other: &Self, _column_id: &str) -> Ordering {
            self.0.cmp(other.0)
        }
    }

    #[test]
    fn test_empty_list_removes_column() {
        let mut filters = ColumnFilters::new();
        filters.set("status", vec!["Active".into()]);
        assert_eq!(filters.active_count(), 1);
        filters.set("status", Vec::new());
        assert!(filters.is_empty());
    }

    #[test]
    fn test_toggle_value() {
        let mut filters = ColumnFilters::new();
        filters.toggle_value("status", "Active");
        filters.toggle_value("status", "On hold");
        assert_eq!(filters.values("status"), ["Active", "On hold"]);
        filters.toggle_value("status", "Active");
        assert_eq!(filters.values("status"), ["On hold"]);
        filters.toggle_value("status", "On hold");
        assert!(filters.is_empty());
    }

    #[test]
    fn test_matches_set_membership() {
        let mut filters = ColumnFilters::new();
        assert!(filters.matches(&Row("Active")));
        filters.set("status", vec!["Active".into(), "Planning".into()]);
        assert!(filters.matches(&Row("Planning")));
        assert!(!filters.matches(&Row("Completed")));
    }

    #[test]
    fn test_unknown_column_never_matches() {
        let mut filters = ColumnFilters::new();
        filters.set("region", vec!["North".into()]);
        assert!(!filters.matches(&Row("Active")));
    }
}
