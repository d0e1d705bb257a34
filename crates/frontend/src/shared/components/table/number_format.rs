//! Number formatting for table cells.

/// Group the integer part with commas and keep `decimals` fraction digits.
///
/// ```
/// use site_dashboard::shared::components::table::format_grouped;
///
/// assert_eq!(format_grouped(1234.567, 2), "1,234.57");
/// ```
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, fraction) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let digits = integer_part.len();
    let mut grouped = String::with_capacity(digits + digits / 3 + decimals + 2);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if let Some(f) = fraction {
        grouped.push('.');
        grouped.push_str(f);
    }

    let is_zero = grouped.chars().all(|c| matches!(c, '0' | ',' | '.'));
    if value.is_sign_negative() && !is_zero {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Dollar amount with cents, e.g. `$12,500.00` or `-$80.25`.
pub fn format_money(value: f64) -> String {
    let grouped = format_grouped(value, 2);
    match grouped.strip_prefix('-') {
        Some(rest) => format!("-${}", rest),
        None => format!("${}", grouped),
    }
}

/// Whole number with grouping.
pub fn format_number_int(value: f64) -> String {
    format_grouped(value, 0)
}

/// Ratio as a percentage with one decimal, e.g. `0.4567` -> `45.7%`.
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.5), "$1,234.50");
        assert_eq!(format_money(1234567.891), "$1,234,567.89");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(-80.25), "-$80.25");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(999.0, 0), "999");
        assert_eq!(format_grouped(1000.0, 0), "1,000");
        assert_eq!(format_grouped(1234.567, 1), "1,234.6");
        assert_eq!(format_grouped(-0.001, 2), "0.00");
    }

    #[test]
    fn test_format_number_int_and_percent() {
        assert_eq!(format_number_int(1234567.0), "1,234,567");
        assert_eq!(format_number_int(-1234.0), "-1,234");
        assert_eq!(format_percent(0.4567), "45.7%");
        assert_eq!(format_percent(1.0), "100.0%");
    }
}
