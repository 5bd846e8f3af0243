//! Index loading.
//!
//! The index is an externally produced JSON array of records, fetched once
//! per widget lifetime through the [`IndexFetcher`] seam. Loading is
//! fail-soft: a transport failure or a malformed body degrades to an empty
//! index with a diagnostic, never an error the caller has to handle. A
//! failed load stays failed; there are no retries.

pub mod file;
#[cfg(feature = "http")]
pub mod http;
pub mod memory;
pub mod traits;

pub use file::FileFetcher;
#[cfg(feature = "http")]
pub use http::HttpFetcher;
pub use memory::MemoryFetcher;
pub use traits::IndexFetcher;

use crate::error::FailSoft;
use crate::record::Record;

/// Fetch and parse the index, degrading to empty on any failure.
///
/// Both failure kinds (transport and parse) are collapsed here: the widget
/// never crashes the page over a broken index.
pub fn load_index(fetcher: &dyn IndexFetcher) -> Vec<Record> {
    fetcher
        .fetch_index()
        .and_then(|body| serde_json::from_str::<Vec<Record>>(&body).map_err(Into::into))
        .fail_soft_default("loading search index")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_index_parses_records() {
        let fetcher = MemoryFetcher::ok(
            r#"[
                {"title": "Intro to Go", "summary": "basics", "permalink": "/a", "date": "2021-01-01"},
                {"title": "Rust Guide", "summary": "ownership", "permalink": "/b", "date": "2021-02-01"}
            ]"#,
        );
        let index = load_index(&fetcher);
        assert_eq!(index.len(), 2);
        assert_eq!(index[0].title, "Intro to Go");
        assert_eq!(index[1].permalink, "/b");
    }

    #[test]
    fn test_load_index_fetch_failure_degrades_to_empty() {
        let fetcher = MemoryFetcher::failing("fetch index failed: 404 Not Found");
        assert!(load_index(&fetcher).is_empty());
    }

    #[test]
    fn test_load_index_malformed_body_degrades_to_empty() {
        let fetcher = MemoryFetcher::ok("<html>not json</html>");
        assert!(load_index(&fetcher).is_empty());
    }

    #[test]
    fn test_load_index_non_array_body_degrades_to_empty() {
        let fetcher = MemoryFetcher::ok(r#"{"title": "an object, not an array"}"#);
        assert!(load_index(&fetcher).is_empty());
    }

    #[test]
    fn test_load_index_empty_array() {
        let fetcher = MemoryFetcher::ok("[]");
        assert!(load_index(&fetcher).is_empty());
    }

    #[test]
    fn test_load_index_through_shared_fetcher() {
        let fetcher = std::sync::Arc::new(MemoryFetcher::ok(r#"[{"title": "shared"}]"#));
        let index = load_index(&fetcher);
        assert_eq!(index.len(), 1);
        assert_eq!(index[0].title, "shared");
    }

    #[test]
    fn test_load_index_preserves_source_order() {
        let fetcher = MemoryFetcher::ok(
            r#"[{"title": "first"}, {"title": "second"}, {"title": "third"}]"#,
        );
        let index = load_index(&fetcher);
        let titles: Vec<&str> = index.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }
}
