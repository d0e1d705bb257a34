//! Date formatting for table cells.
//!
//! Dates travel as ISO strings (`2024-03-15` or `2024-03-15T14:02:26Z`).

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn split_iso_date(value: &str) -> Option<(&str, usize, u32)> {
    let date_part = value.split('T').next()?;
    let mut parts = date_part.splitn(3, '-');
    let year = parts.next()?;
    let month: usize = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if year.len() != 4 || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((year, month, day))
}

/// `2024-03-15` -> `Mar 15, 2024`. Anything unparseable is returned as is.
pub fn format_date(value: &str) -> String {
    match split_iso_date(value) {
        Some((year, month, day)) => format!("{} {}, {}", MONTHS[month - 1], day, year),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "Mar 15, 2024");
        assert_eq!(format_date("2023-12-01T08:00:00Z"), "Dec 1, 2023");
    }

    #[test]
    fn test_invalid_input_passes_through() {
        assert_eq!(format_date("soon"), "soon");
        assert_eq!(format_date("2024-13-01"), "2024-13-01");
        assert_eq!(format_date("not-a-dateTx"), "not-a-dateTx");
    }
}
