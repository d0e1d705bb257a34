use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn is_ascending(self) -> bool {
        matches!(self, SortDirection::Asc)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSort {
    pub column_id: String,
    pub direction: SortDirection,
}

/// Ordered list of active sorts, highest priority first.
///
/// Holds at most one entry per column id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortingState(Vec<ColumnSort>);

impl SortingState {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Single-column sort.
    pub fn by(column_id: impl Into<String>, direction: SortDirection) -> Self {
        let mut state = Self::new();
        state.set(column_id, direction);
        state
    }

    pub fn entries(&self) -> &[ColumnSort] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn direction_of(&self, column_id: &str) -> Option<SortDirection> {
        self.0
            .iter()
            .find(|s| s.column_id == column_id)
            .map(|s| s.direction)
    }

    /// Sets the direction for a column, replacing its existing entry in place.
    pub fn set(&mut self, column_id: impl Into<String>, direction: SortDirection) {
        let column_id = column_id.into();
        match self.0.iter_mut().find(|s| s.column_id == column_id) {
            Some(existing) => existing.direction = direction,
            None => self.0.push(ColumnSort {
                column_id,
                direction,
            }),
        }
    }

    pub fn remove(&mut self, column_id: &str) {
        self.0.retain(|s| s.column_id != column_id);
    }

    /// Header-click cycle: none -> asc -> desc -> none.
    ///
    /// Without `multi` the toggled column becomes the only sort.
    pub fn toggle(&mut self, column_id: &str, multi: bool) {
        let next = match self.direction_of(column_id) {
            None => Some(SortDirection::Asc),
            Some(SortDirection::Asc) => Some(SortDirection::Desc),
            Some(SortDirection::Desc) => None,
        };

        if !multi {
            self.0.retain(|s| s.column_id == column_id);
        }
        match next {
            Some(direction) => self.set(column_id, direction),
            None => self.remove(column_id),
        }
    }
}

impl FromIterator<ColumnSort> for SortingState {
    fn from_iter<I: IntoIterator<Item = ColumnSort>>(iter: I) -> Self {
        let mut state = Self::new();
        for sort in iter {
            state.set(sort.column_id, sort.direction);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycles_through_directions() {
        let mut sorting = SortingState::new();
        sorting.toggle("name", false);
        assert_eq!(sorting.direction_of("name"), Some(SortDirection::Asc));
        sorting.toggle("name", false);
        assert_eq!(sorting.direction_of("name"), Some(SortDirection::Desc));
        sorting.toggle("name", false);
        assert!(sorting.is_empty());
    }

    #[test]
    fn test_single_toggle_replaces_other_columns() {
        let mut sorting = SortingState::by("budget", SortDirection::Desc);
        sorting.toggle("name", false);
        assert_eq!(sorting.entries().len(), 1);
        assert_eq!(sorting.entries()[0].column_id, "name");
    }

    #[test]
    fn test_multi_toggle_keeps_priority_order() {
        let mut sorting = SortingState::by("status", SortDirection::Asc);
        sorting.toggle("budget", true);
        sorting.toggle("status", true);
        let ids: Vec<_> = sorting.entries().iter().map(|s| s.column_id.as_str()).collect();
        assert_eq!(ids, vec!["status", "budget"]);
        assert_eq!(sorting.direction_of("status"), Some(SortDirection::Desc));
    }

    #[test]
    fn test_one_entry_per_column() {
        let sorting: SortingState = vec![
            ColumnSort { column_id: "a".into(), direction: SortDirection::Asc },
            ColumnSort { column_id: "a".into(), direction: SortDirection::Desc },
        ]
        .into_iter()
        .collect();
        assert_eq!(sorting.entries().len(), 1);
        assert_eq!(sorting.direction_of("a"), Some(SortDirection::Desc));
    }
}
