//! The index fetch trait.
//!
//! The base location (URL or directory) is owned by the fetcher; callers
//! just ask for the index document.

use std::sync::Arc;

use crate::error::Result;

/// Trait for index transports.
///
/// Implementations resolve the index document against their base location
/// and return the raw body. Parsing happens in [`crate::fetch::load_index`];
/// a fetcher only reports transport-level success or failure.
pub trait IndexFetcher: Send + Sync {
    /// Fetch the raw index document.
    ///
    /// A non-success response (HTTP status, missing file) is an error, not
    /// an empty body.
    fn fetch_index(&self) -> Result<String>;
}

/// Blanket implementation for Arc-wrapped fetchers.
///
/// Allows sharing one fetcher between a widget and tests.
impl<T: IndexFetcher + ?Sized> IndexFetcher for Arc<T> {
    fn fetch_index(&self) -> Result<String> {
        (**self).fetch_index()
    }
}
