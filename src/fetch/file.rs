//! Filesystem index fetcher.
//!
//! Serves the same role as the HTTP fetcher for embedders that render
//! pages from a local site build (previews, tests, desktop shells): the
//! index document is read from `<base_dir>/<index_location>`.

use std::fs;
use std::path::PathBuf;

use crate::config::DEFAULT_INDEX_LOCATION;
use crate::error::{Result, SiftError};
use crate::fetch::IndexFetcher;

/// Maximum index file size that will be read into memory (10 MB).
///
/// Site indexes are small; anything larger is a build artifact gone wrong
/// and is treated as a load failure.
pub const MAX_INDEX_SIZE: u64 = 10 * 1024 * 1024;

/// Index fetcher reading from a local directory.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    index_path: PathBuf,
}

impl FileFetcher {
    /// Create a fetcher reading `index.json` from the given base directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self::with_location(base_dir, DEFAULT_INDEX_LOCATION)
    }

    /// Create a fetcher with a non-default index location.
    pub fn with_location(base_dir: impl Into<PathBuf>, location: &str) -> Self {
        Self {
            index_path: base_dir.into().join(location),
        }
    }
}

impl IndexFetcher for FileFetcher {
    fn fetch_index(&self) -> Result<String> {
        let metadata = fs::metadata(&self.index_path).map_err(|e| {
            SiftError::load(format!(
                "failed to stat {}: {}",
                self.index_path.display(),
                e
            ))
        })?;

        let size = metadata.len();
        if size > MAX_INDEX_SIZE {
            return Err(SiftError::load(format!(
                "index {} is too large ({} bytes, max {} bytes)",
                self.index_path.display(),
                size,
                MAX_INDEX_SIZE
            )));
        }

        fs::read_to_string(&self.index_path).map_err(|e| {
            SiftError::load(format!(
                "failed to read {}: {}",
                self.index_path.display(),
                e
            ))
        })
    }
}
