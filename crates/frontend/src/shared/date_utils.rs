//! Date display helpers.
//!
//! Wire dates are opaque backend strings; formatting stays on the
//! string level and falls back to the raw value on anything unexpected.

use chrono::NaiveDate;

/// Format an ISO date string to DD/MM/YYYY.
/// Example: "2025-01-15" or "2025-01-15T14:02:26Z" -> "15/01/2025"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Table-cell variant: "-" for absent dates.
pub fn format_date_opt(date_str: Option<&str>) -> String {
    match date_str {
        Some(s) if !s.is_empty() => format_date(s),
        _ => "-".to_string(),
    }
}

/// Parse a user-entered `YYYY-MM-DD` range, `None` unless both ends
/// parse and the range is not inverted.
pub fn parse_range(start: &str, end: &str) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::parse_from_str(start.trim(), "%Y-%m-%d").ok()?;
    let end = NaiveDate::parse_from_str(end.trim(), "%Y-%m-%d").ok()?;
    (start <= end).then_some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-01-15"), "15/01/2025");
        assert_eq!(format_date("2025-01-15T14:02:26Z"), "15/01/2025");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_date_opt() {
        assert_eq!(format_date_opt(Some("2025-01-15")), "15/01/2025");
        assert_eq!(format_date_opt(Some("")), "-");
        assert_eq!(format_date_opt(None), "-");
    }

    #[test]
    fn test_parse_range() {
        assert!(parse_range("2025-01-01", "2025-12-31").is_some());
        // Inverted and unparseable ranges are rejected.
        assert!(parse_range("2025-12-31", "2025-01-01").is_none());
        assert!(parse_range("01/01/2025", "2025-12-31").is_none());
    }
}
