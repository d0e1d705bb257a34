use chrono::{Days, NaiveDate};

/// ISO date `days` after 2023-01-02.
pub fn iso_date(days: u64) -> String {
    NaiveDate::from_ymd_opt(2023, 1, 2)
        .and_then(|base| base.checked_add_days(Days::new(days)))
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Deterministic cyclic pick, so datasets are stable between reloads.
pub fn pick<T: Copy>(items: &[T], index: usize) -> T {
    items[index % items.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date() {
        assert_eq!(iso_date(0), "2023-01-02");
        assert_eq!(iso_date(30), "2023-02-01");
    }

    #[test]
    fn test_pick_wraps() {
        assert_eq!(pick(&["a", "b", "c"], 4), "b");
    }
}
