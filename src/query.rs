//! Query handling: the input state machine and ResultSet computation.
//!
//! Every input event is handled synchronously and atomically; there is no
//! debounce and no cancellation. Each computed ResultSet fully supersedes
//! the previous one before the next event can arrive.

use crate::matcher::matches;
use crate::record::Record;

/// State of the query handler.
///
/// Driven by input events: a non-empty trimmed query enters `Filtering`,
/// an empty one returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryState {
    /// No query. Rendered results are cleared immediately on entry.
    #[default]
    Idle,
    /// A non-empty query is active and results are rendered.
    Filtering,
}

impl QueryState {
    /// Classify a raw input value. Whitespace-only input is `Idle`:
    /// clear-on-empty is an explicit policy, not "match everything".
    pub fn classify(raw: &str) -> Self {
        if raw.trim().is_empty() {
            Self::Idle
        } else {
            Self::Filtering
        }
    }
}

/// Compute the ResultSet for a query against a loaded index.
///
/// Scans the index in order, collecting records the matcher accepts, and
/// stops once `cap` matches are gathered. The result is always an
/// order-preserving subsequence of `index` (stable filter, no re-ranking).
/// The query is trimmed here; a whitespace-only query yields no results.
pub fn result_set<'a>(index: &'a [Record], query: &str, cap: usize) -> Vec<&'a Record> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    index
        .iter()
        .filter(|record| matches(record, query))
        .take(cap)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_RESULTS;

    fn record(title: &str, summary: &str) -> Record {
        Record::new(title, summary, "/p", "2021-01-01")
    }

    fn sample_index() -> Vec<Record> {
        vec![
            record("Intro to Go", "basics"),
            record("Rust Guide", "ownership"),
            record("Go Modules", "dependency management"),
        ]
    }

    #[test]
    fn test_classify_empty_is_idle() {
        assert_eq!(QueryState::classify(""), QueryState::Idle);
        assert_eq!(QueryState::classify("   "), QueryState::Idle);
        assert_eq!(QueryState::classify("\t\n"), QueryState::Idle);
    }

    #[test]
    fn test_classify_non_empty_is_filtering() {
        assert_eq!(QueryState::classify("go"), QueryState::Filtering);
        assert_eq!(QueryState::classify("  go  "), QueryState::Filtering);
    }

    #[test]
    fn test_empty_query_yields_empty_result_set() {
        let index = sample_index();
        assert!(result_set(&index, "", 50).is_empty());
        assert!(result_set(&index, "   ", 50).is_empty());
    }

    #[test]
    fn test_go_scenario_single_match_plus_order() {
        let index = vec![
            record("Intro to Go", "basics"),
            record("Rust Guide", "ownership"),
        ];
        let results = result_set(&index, "go", 50);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Intro to Go");
    }

    #[test]
    fn test_results_preserve_index_order() {
        let index = sample_index();
        let results = result_set(&index, "go", 50);
        let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Intro to Go", "Go Modules"]);
    }

    #[test]
    fn test_query_is_trimmed_before_matching() {
        let index = sample_index();
        let results = result_set(&index, "  rust  ", 50);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Rust Guide");
    }

    #[test]
    fn test_cap_keeps_first_fifty_matches() {
        let index: Vec<Record> = (0..60)
            .map(|i| record(&format!("article {}", i), "all match a"))
            .collect();
        let results = result_set(&index, "a", DEFAULT_MAX_RESULTS);
        assert_eq!(results.len(), 50);
        // The cap keeps the first 50 matches in index order.
        assert_eq!(results[0].title, "article 0");
        assert_eq!(results[49].title, "article 49");
    }

    #[test]
    fn test_empty_index_yields_empty_result_set() {
        let index: Vec<Record> = Vec::new();
        assert!(result_set(&index, "anything", 50).is_empty());
    }

    // =========================================================================
    // Property-based tests
    // =========================================================================

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_record() -> impl Strategy<Value = Record> {
            ("[a-zA-Z ]{0,16}", "[a-zA-Z ]{0,16}")
                .prop_map(|(title, summary)| Record::new(title, summary, "/p", "2021-01-01"))
        }

        fn arb_index() -> impl Strategy<Value = Vec<Record>> {
            prop::collection::vec(arb_record(), 0..80)
        }

        proptest! {
            // Property: the ResultSet never exceeds the cap
            #[test]
            fn prop_result_set_respects_cap(
                index in arb_index(),
                query in "[a-zA-Z]{1,4}",
                cap in 0usize..60,
            ) {
                let results = result_set(&index, &query, cap);
                prop_assert!(results.len() <= cap);
            }

            // Property: the ResultSet is an order-preserving subsequence of the index
            #[test]
            fn prop_result_set_is_ordered_subsequence(
                index in arb_index(),
                query in "[a-zA-Z]{1,4}",
            ) {
                let results = result_set(&index, &query, 50);
                let mut cursor = index.iter();
                for result in results {
                    prop_assert!(
                        cursor.any(|r| std::ptr::eq(r, result)),
                        "result not found in index order"
                    );
                }
            }

            // Property: membership iff the trimmed query is a lowercase substring
            // of title or summary
            #[test]
            fn prop_membership_iff_substring(
                index in arb_index(),
                query in " {0,2}[a-zA-Z]{1,4} {0,2}",
            ) {
                let results = result_set(&index, &query, usize::MAX);
                let needle = query.trim().to_lowercase();
                for record in &index {
                    let expected = record.title.to_lowercase().contains(&needle)
                        || record.summary.to_lowercase().contains(&needle);
                    let present = results.iter().any(|r| std::ptr::eq(*r, record));
                    prop_assert_eq!(present, expected);
                }
            }

            // Property: whitespace-only queries always yield the empty set
            #[test]
            fn prop_blank_query_is_empty(index in arb_index(), query in " {0,8}") {
                prop_assert!(result_set(&index, &query, 50).is_empty());
            }
        }
    }
}
