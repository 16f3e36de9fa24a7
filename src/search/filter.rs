//! Case-insensitive literal substring filter.
//!
//! The query is never interpreted as a pattern: characters such as `.`, `*`,
//! `(` or `\` match themselves. Filtering is a linear scan, cheap enough to run
//! on every keystroke for catalogs in the low thousands.

use crate::domain::IconEntry;

/// Returns the entries whose name contains `query`, ignoring case.
///
/// The result is an order-preserving subsequence of `entries`; an empty query
/// returns the input unchanged.
///
/// # Example
///
/// ```rust
/// use zicons::domain::{Glyph, IconEntry};
/// use zicons::search::filter;
///
/// let entries: Vec<IconEntry> = ["Home", "House", "Heart", "Star"]
///     .into_iter()
///     .map(|n| IconEntry::new(n, Glyph::new("*")))
///     .collect();
///
/// let names: Vec<String> = filter(&entries, "h").into_iter().map(|e| e.name).collect();
/// assert_eq!(names, vec!["Home", "House", "Heart"]);
/// ```
#[must_use]
pub fn filter(entries: &[IconEntry], query: &str) -> Vec<IconEntry> {
    if query.is_empty() {
        return entries.to_vec();
    }

    let needle = query.to_lowercase();
    let filtered: Vec<IconEntry> = entries
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    tracing::trace!(
        total = entries.len(),
        matched = filtered.len(),
        query_len = query.len(),
        "filter applied"
    );

    filtered
}

/// Character range `(start, end)` of the first case-insensitive match of
/// `query` in `name`, end exclusive.
///
/// Returns `None` for an empty query, no match, or names whose lowercase form
/// changes length (where byte offsets no longer line up with the original).
#[must_use]
pub fn highlight_range(name: &str, query: &str) -> Option<(usize, usize)> {
    if query.is_empty() {
        return None;
    }

    let lower = name.to_lowercase();
    if lower.len() != name.len() {
        return None;
    }

    let byte_start = lower.find(&query.to_lowercase())?;
    let byte_end = byte_start + query.to_lowercase().len();

    if !name.is_char_boundary(byte_start) || !name.is_char_boundary(byte_end) {
        return None;
    }

    let start = name[..byte_start].chars().count();
    let len = name[byte_start..byte_end].chars().count();
    Some((start, start + len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Glyph;

    fn entries(names: &[&str]) -> Vec<IconEntry> {
        names.iter().map(|n| IconEntry::new(*n, Glyph::new("*"))).collect()
    }

    fn names(entries: &[IconEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn empty_query_is_identity() {
        let all = entries(&["Star", "Home", "Heart"]);
        assert_eq!(filter(&all, ""), all);
    }

    #[test]
    fn matches_substring_anywhere() {
        let all = entries(&["ArrowUp", "Sparrow", "Home"]);
        assert_eq!(names(&filter(&all, "rrow")), vec!["ArrowUp", "Sparrow"]);
    }

    #[test]
    fn ignores_case_of_query_and_name() {
        let all = entries(&["ArrowUp", "arrowdown", "Home"]);
        assert_eq!(filter(&all, "ARROW"), filter(&all, "arrow"));
        assert_eq!(filter(&all, "ArRoW").len(), 2);
    }

    #[test]
    fn result_is_ordered_subsequence() {
        let all = entries(&["Zap", "Home", "Anchor", "House", "Hash"]);
        let result = filter(&all, "h");
        let mut cursor = all.iter();
        for entry in &result {
            assert!(cursor.any(|e| e == entry), "{} out of order", entry.name);
        }
    }

    #[test]
    fn filter_is_idempotent() {
        let all = entries(&["Home", "House", "Heart", "Star", "Hash"]);
        let once = filter(&all, "ho");
        assert_eq!(filter(&once, "ho"), once);
    }

    #[test]
    fn pattern_characters_are_literal() {
        let all = entries(&["a.b", "axb", "a*b", "(x)", "back\\slash"]);
        assert_eq!(names(&filter(&all, ".")), vec!["a.b"]);
        assert_eq!(names(&filter(&all, "*")), vec!["a*b"]);
        assert_eq!(names(&filter(&all, "(")), vec!["(x)"]);
        assert_eq!(names(&filter(&all, "\\")), vec!["back\\slash"]);
        assert!(filter(&all, "[").is_empty());
    }

    #[test]
    fn no_match_yields_empty() {
        let all = entries(&["Home", "Star"]);
        assert!(filter(&all, "zzz").is_empty());
    }

    #[test]
    fn highlight_range_uses_char_indices() {
        assert_eq!(highlight_range("ArrowUp", "up"), Some((5, 7)));
        assert_eq!(highlight_range("Café-Cup", "cup"), Some((5, 8)));
        assert_eq!(highlight_range("Home", ""), None);
        assert_eq!(highlight_range("Home", "x"), None);
    }
}
