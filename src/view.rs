//! Quote selection logic behind the display commands.
//!
//! Pure functions over the store's list: random pick, category filtering
//! with the `all` sentinel, and distinct-category enumeration. The CLI
//! commands render the results; nothing here touches the terminal.

use std::fmt;

use indexmap::IndexSet;
use rand::Rng;

use crate::model::QuoteItem;

/// Sentinel filter value selecting every category.
pub const ALL_CATEGORIES: &str = "all";

/// Category filter for list-style rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Match every quote.
    All,
    /// Match quotes whose category equals the given name exactly.
    Named(String),
}

impl CategoryFilter {
    /// Parse a filter from user input; `"all"` (any case) is the sentinel.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case(ALL_CATEGORIES) {
            Self::All
        } else {
            Self::Named(raw.to_string())
        }
    }

    /// Whether a quote passes this filter.
    #[must_use]
    pub fn matches(&self, item: &QuoteItem) -> bool {
        match self {
            Self::All => true,
            Self::Named(category) => item.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CATEGORIES),
            Self::Named(category) => f.write_str(category),
        }
    }
}

/// Pick a uniformly random quote, or `None` for an empty list.
#[must_use]
pub fn pick_random(items: &[QuoteItem]) -> Option<&QuoteItem> {
    if items.is_empty() {
        return None;
    }
    let index = rand::thread_rng().gen_range(0..items.len());
    Some(&items[index])
}

/// The subsequence of quotes matching the filter, stored order preserved.
#[must_use]
pub fn filter<'a>(items: &'a [QuoteItem], filter: &CategoryFilter) -> Vec<&'a QuoteItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Distinct categories in first-occurrence order.
#[must_use]
pub fn categories(items: &[QuoteItem]) -> Vec<&str> {
    let set: IndexSet<&str> = items.iter().map(|item| item.category.as_str()).collect();
    set.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<QuoteItem> {
        vec![
            QuoteItem::new("a", "Motivation"),
            QuoteItem::new("b", "Humor"),
            QuoteItem::new("c", "Motivation"),
            QuoteItem::new("d", "General"),
        ]
    }

    #[test]
    fn test_pick_random_stays_in_list() {
        let items = sample();
        for _ in 0..50 {
            let picked = pick_random(&items).unwrap();
            assert!(items.iter().any(|item| item == picked));
        }
    }

    #[test]
    fn test_pick_random_empty_is_none() {
        assert!(pick_random(&[]).is_none());
    }

    #[test]
    fn test_filter_all_preserves_full_order() {
        let items = sample();
        let filtered = filter(&items, &CategoryFilter::All);
        let texts: Vec<_> = filtered.iter().map(|item| item.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_filter_named_is_exact_subsequence() {
        let items = sample();
        let filtered = filter(&items, &CategoryFilter::parse("Motivation"));
        let texts: Vec<_> = filtered.iter().map(|item| item.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let items = sample();
        assert!(filter(&items, &CategoryFilter::parse("Nope")).is_empty());
    }

    #[test]
    fn test_all_sentinel_parses_case_insensitively() {
        assert_eq!(CategoryFilter::parse("ALL"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Allsorts"),
            CategoryFilter::Named("Allsorts".to_string())
        );
    }

    #[test]
    fn test_categories_first_occurrence_order() {
        let items = sample();
        assert_eq!(categories(&items), vec!["Motivation", "Humor", "General"]);
    }

    #[test]
    fn test_categories_empty() {
        assert!(categories(&[]).is_empty());
    }
}
