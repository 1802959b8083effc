//! Buffer category convention
//!
//! A category named "Buffer" (any letter case, exact match otherwise) is a
//! reserve. It still counts toward category budgets, but it is held back from
//! the weekly safe-to-spend figure. There is no dedicated field for it; any
//! category opts in by its name.

use crate::models::money::normalize_amount;
use crate::models::LineItem;

/// Category name that marks the reserve
pub const BUFFER_CATEGORY_NAME: &str = "buffer";

/// Whether `name` marks a buffer category
pub fn is_buffer_name(name: &str) -> bool {
    name.to_lowercase() == BUFFER_CATEGORY_NAME
}

/// First buffer category in list order, if any
pub fn find_buffer(categories: &[LineItem]) -> Option<&LineItem> {
    categories.iter().find(|c| is_buffer_name(&c.name))
}

/// Normalized amount of the first buffer category, or zero if there is none
pub fn buffer_amount(categories: &[LineItem]) -> f64 {
    find_buffer(categories)
        .map(|c| normalize_amount(c.amount))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_match() {
        assert!(is_buffer_name("Buffer"));
        assert!(is_buffer_name("BUFFER"));
        assert!(is_buffer_name("buffer"));
    }

    #[test]
    fn test_exact_match_only() {
        assert!(!is_buffer_name(" Buffer"));
        assert!(!is_buffer_name("Buffer fund"));
        assert!(!is_buffer_name("buf"));
    }

    #[test]
    fn test_first_match_wins() {
        let categories = vec![
            LineItem::with_id("1", "Food", 4000.0),
            LineItem::with_id("2", "buffer", 800.0),
            LineItem::with_id("3", "BUFFER", 300.0),
        ];
        assert_eq!(find_buffer(&categories).unwrap().id, "2");
        assert_eq!(buffer_amount(&categories), 800.0);
    }

    #[test]
    fn test_missing_buffer_is_zero() {
        let categories = vec![LineItem::with_id("1", "Food", 4000.0)];
        assert_eq!(buffer_amount(&categories), 0.0);
        assert_eq!(buffer_amount(&[]), 0.0);
    }

    #[test]
    fn test_negative_buffer_is_normalized() {
        let categories = vec![LineItem::with_id("1", "Buffer", -500.0)];
        assert_eq!(buffer_amount(&categories), 0.0);
    }
}
