//! HTTP index fetcher.
//!
//! The browser-idiom transport: one GET of a relative `index.json`
//! resolved against the page's base URL. No auth, no custom headers, no
//! retries, no caching directives beyond client defaults.

use reqwest::blocking::Client;
use reqwest::Url;

use crate::config::DEFAULT_INDEX_LOCATION;
use crate::error::{Result, SiftError};
use crate::fetch::IndexFetcher;

/// Index fetcher issuing a single GET against a base URL.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    index_url: Url,
}

impl HttpFetcher {
    /// Create a fetcher resolving `index.json` against the given base URL.
    ///
    /// The base must be an absolute URL; joining follows standard relative
    /// resolution, so a base of `https://example.org/blog/` yields
    /// `https://example.org/blog/index.json`.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_location(base_url, DEFAULT_INDEX_LOCATION)
    }

    /// Create a fetcher with a non-default index location.
    pub fn with_location(base_url: &str, location: &str) -> Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| SiftError::config(format!("invalid base URL {}: {}", base_url, e)))?;
        let index_url = base
            .join(location)
            .map_err(|e| SiftError::config(format!("invalid index location {}: {}", location, e)))?;

        Ok(Self {
            client: Client::new(),
            index_url,
        })
    }

    /// The fully resolved index URL.
    pub fn index_url(&self) -> &Url {
        &self.index_url
    }
}

impl IndexFetcher for HttpFetcher {
    fn fetch_index(&self) -> Result<String> {
        let response = self.client.get(self.index_url.clone()).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SiftError::load(format!(
                "fetch index failed: {} returned {}",
                self.index_url, status
            )));
        }

        Ok(response.text()?)
    }
}
