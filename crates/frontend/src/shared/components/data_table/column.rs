use contracts::shared::table::TableRow as DataRow;
use leptos::prelude::*;
use std::sync::Arc;

/// Renders one cell of a row.
pub type CellRenderer<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnAlign {
    #[default]
    Left,
    Right,
    Center,
}

impl ColumnAlign {
    pub fn class(self) -> &'static str {
        match self {
            ColumnAlign::Left => "cell--left",
            ColumnAlign::Right => "cell--right",
            ColumnAlign::Center => "cell--center",
        }
    }
}

/// Column descriptor. Ids must be unique within a table.
///
/// ```ignore
/// let columns = vec![
///     ColumnDef::text("code", "Code").sortable(),
///     ColumnDef::new("budget", "Budget", |p: &Project| {
///         view! { <span>{format_money(p.budget)}</span> }.into_any()
///     })
///     .sortable()
///     .align(ColumnAlign::Right),
/// ];
/// ```
pub struct ColumnDef<T> {
    pub id: &'static str,
    pub header: String,
    pub cell: CellRenderer<T>,
    pub sortable: bool,
    pub filterable: bool,
    pub searchable: bool,
    /// Fixed filter menu entries. When absent the menu lists the distinct
    /// values of the loaded rows.
    pub filter_options: Option<Vec<String>>,
    pub align: ColumnAlign,
    pub min_width: Option<u32>,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            header: self.header.clone(),
            cell: Arc::clone(&self.cell),
            sortable: self.sortable,
            filterable: self.filterable,
            searchable: self.searchable,
            filter_options: self.filter_options.clone(),
            align: self.align,
            min_width: self.min_width,
        }
    }
}

impl<T> ColumnDef<T> {
    pub fn new(
        id: &'static str,
        header: impl Into<String>,
        cell: impl Fn(&T) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Self {
            id,
            header: header.into(),
            cell: Arc::new(cell),
            sortable: false,
            filterable: false,
            searchable: true,
            filter_options: None,
            align: ColumnAlign::Left,
            min_width: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    pub fn filter_options(mut self, options: Vec<String>) -> Self {
        self.filterable = true;
        self.filter_options = Some(options);
        self
    }

    /// Exclude the column from global search.
    pub fn not_searchable(mut self) -> Self {
        self.searchable = false;
        self
    }

    pub fn align(mut self, align: ColumnAlign) -> Self {
        self.align = align;
        self
    }

    pub fn min_width(mut self, px: u32) -> Self {
        self.min_width = Some(px);
        self
    }
}

impl<T: DataRow + 'static> ColumnDef<T> {
    /// Column that renders the row's `cell_text` for its id.
    pub fn text(id: &'static str, header: impl Into<String>) -> Self {
        Self::new(id, header, move |row: &T| {
            row.cell_text(id).unwrap_or_default().into_any()
        })
    }
}

/// Ids of the columns that take part in global search.
pub fn search_columns<T>(columns: &[ColumnDef<T>]) -> Vec<&'static str> {
    columns.iter().filter(|c| c.searchable).map(|c| c.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::table::validate_column_ids;
    use std::cmp::Ordering;

    struct Crew {
        lead: String,
    }

    impl DataRow for Crew {
        fn cell_text(&self, column_id: &str) -> Option<String> {
            (column_id == "lead").then(|| self.lead.clone())
        }

        fn compare_by_column(&self, other: &Self, _column_id: &str) -> Ordering {
            self.lead.cmp(&other.lead)
        }
    }

    #[test]
    fn test_builder_flags() {
        let column = ColumnDef::<Crew>::text("lead", "Lead")
            .sortable()
            .filter_options(vec!["Ana".into(), "Raj".into()])
            .align(ColumnAlign::Right)
            .min_width(120);
        assert!(column.sortable);
        assert!(column.filterable);
        assert!(column.searchable);
        assert_eq!(column.align.class(), "cell--right");
        assert_eq!(column.min_width, Some(120));
    }

    #[test]
    fn test_search_columns_skip_excluded() {
        let columns = vec![
            ColumnDef::<Crew>::text("lead", "Lead"),
            ColumnDef::<Crew>::text("shift", "Shift").not_searchable(),
        ];
        assert_eq!(search_columns(&columns), vec!["lead"]);
    }

    #[test]
    fn test_duplicate_ids_are_reported() {
        let columns = vec![
            ColumnDef::<Crew>::text("lead", "Lead"),
            ColumnDef::<Crew>::text("lead", "Lead again"),
        ];
        assert!(validate_column_ids(columns.iter().map(|c| c.id)).is_err());
    }
}
