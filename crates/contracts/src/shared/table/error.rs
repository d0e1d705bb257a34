use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("duplicate column id `{0}`")]
    DuplicateColumnId(String),

    #[error("`{0}` is not a page number")]
    InvalidPageInput(String),

    #[error("page {page} is outside 1..={total_pages}")]
    PageOutOfRange { page: usize, total_pages: usize },

    #[error("invalid table configuration: {0}")]
    InvalidConfig(String),
}

/// Column ids must be unique within a table.
pub fn validate_column_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Result<(), TableError> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(TableError::DuplicateColumnId(id.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_ids_pass() {
        assert_eq!(validate_column_ids(["code", "name", "status"]), Ok(()));
    }

    #[test]
    fn test_duplicate_id_is_reported() {
        assert_eq!(
            validate_column_ids(["code", "name", "code"]),
            Err(TableError::DuplicateColumnId("code".to_string()))
        );
    }
}
