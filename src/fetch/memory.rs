//! Canned index fetcher for testing.

use crate::error::{Result, SiftError};
use crate::fetch::IndexFetcher;

/// In-memory fetcher returning a canned response.
///
/// Built as either a fixed body or a fixed load failure, for exercising
/// both sides of the fail-soft load boundary without a network.
#[derive(Debug, Clone)]
pub struct MemoryFetcher {
    response: CannedResponse,
}

#[derive(Debug, Clone)]
enum CannedResponse {
    Body(String),
    Failure(String),
}

impl MemoryFetcher {
    /// Fetcher that succeeds with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            response: CannedResponse::Body(body.into()),
        }
    }

    /// Fetcher that fails with the given load error message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: CannedResponse::Failure(message.into()),
        }
    }
}

impl IndexFetcher for MemoryFetcher {
    fn fetch_index(&self) -> Result<String> {
        match &self.response {
            CannedResponse::Body(body) => Ok(body.clone()),
            CannedResponse::Failure(message) => Err(SiftError::load(message.clone())),
        }
    }
}
