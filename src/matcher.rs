//! The match predicate: case-insensitive substring search.
//!
//! Deliberately simple, matching the index's scale: no tokenization, no
//! word-boundary logic, no locale-aware folding, no Unicode normalization
//! beyond what [`str::to_lowercase`] does. "art" matches "Smart Home".

use crate::record::Record;

/// Pure predicate: does `query` match `record`?
///
/// Matches when the lowercased query is a substring of the lowercased
/// title OR the lowercased summary. Permalink and date are never matched.
/// The caller is expected to trim the query first; an empty query matches
/// everything and is screened out by the query handler's clear-on-empty
/// policy before this predicate runs.
pub fn matches(record: &Record, query: &str) -> bool {
    let needle = query.to_lowercase();
    record.title.to_lowercase().contains(&needle)
        || record.summary.to_lowercase().contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, summary: &str) -> Record {
        Record::new(title, summary, "/p", "2021-01-01")
    }

    #[test]
    fn test_matches_title_substring() {
        assert!(matches(&record("Smart Home", ""), "art"));
    }

    #[test]
    fn test_matches_summary_substring() {
        assert!(matches(&record("T", "ownership and borrowing"), "borrow"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(matches(&record("Hello World", ""), "HELLO"));
        assert!(matches(&record("HELLO WORLD", ""), "hello"));
    }

    #[test]
    fn test_no_match() {
        assert!(!matches(&record("Rust Guide", "ownership"), "go"));
    }

    #[test]
    fn test_permalink_and_date_not_matched() {
        let r = Record::new("T", "S", "/posts/zebra", "zebra-day");
        assert!(!matches(&r, "zebra"));
    }

    #[test]
    fn test_empty_fields_do_not_match() {
        assert!(!matches(&record("", ""), "anything"));
    }

    #[test]
    fn test_intro_to_go_scenario() {
        let go = record("Intro to Go", "basics");
        let rust = record("Rust Guide", "ownership");
        assert!(matches(&go, "go"));
        assert!(!matches(&rust, "go"));
    }
}
