use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Hidden column ids. Columns are visible unless listed here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnVisibility(BTreeSet<String>);

impl ColumnVisibility {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn is_visible(&self, column_id: &str) -> bool {
        !self.0.contains(column_id)
    }

    pub fn visible_count<'a>(&self, column_ids: impl IntoIterator<Item = &'a str>) -> usize {
        column_ids
            .into_iter()
            .filter(|id| self.is_visible(id))
            .count()
    }

    /// Flips a column's visibility. Hiding the last visible column is a no-op.
    pub fn toggle<'a>(&mut self, column_id: &str, all_ids: impl IntoIterator<Item = &'a str>) {
        if self.0.remove(column_id) {
            return;
        }
        if self.visible_count(all_ids) > 1 {
            self.0.insert(column_id.to_string());
        }
    }

    pub fn show_all(&mut self) {
        self.0.clear();
    }
}
