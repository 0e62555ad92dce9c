//! View-side sorting helpers for list tables.
//!
//! Sorting works on a rendered copy of the rows; the view-model's held
//! list always keeps the backend's order.

use std::cmp::Ordering;

/// Compare two rendered cell values, numerically when both parse as
/// numbers, case-insensitively otherwise.
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

/// Get the sort indicator for a column header.
pub fn get_sort_indicator(current: Option<usize>, column: usize, ascending: bool) -> &'static str {
    if current == Some(column) {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_cells_compare_numerically() {
        assert_eq!(compare_cells("9.99", "100"), Ordering::Less);
        assert_eq!(compare_cells("1000", "500"), Ordering::Greater);
    }

    #[test]
    fn text_cells_compare_case_insensitively() {
        assert_eq!(compare_cells("widget", "Widget"), Ordering::Equal);
        assert_eq!(compare_cells("Laptop", "iphone"), Ordering::Greater);
    }

    #[test]
    fn indicator_reflects_active_column() {
        assert_eq!(get_sort_indicator(Some(1), 1, true), " ▲");
        assert_eq!(get_sort_indicator(Some(1), 1, false), " ▼");
        assert_eq!(get_sort_indicator(Some(1), 2, true), " ⇅");
        assert_eq!(get_sort_indicator(None, 0, true), " ⇅");
    }
}
