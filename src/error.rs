//! Unified error types for sift with fail-soft philosophy.
//!
//! All errors in sift follow the fail-soft principle: a broken search index
//! degrades the page to "search returns nothing" rather than breaking page
//! load. Errors are caught at the load boundary, logged to the diagnostic
//! channel, and collapsed into safe defaults. They are never surfaced to the
//! user as a visible error state.

use thiserror::Error;

/// The main error type for sift operations.
#[derive(Error, Debug)]
pub enum SiftError {
    /// Transport failures while fetching the index: network errors,
    /// non-success HTTP status, or filesystem I/O.
    #[error("load error: {message}")]
    Load { message: String },

    /// The fetched index body is not a valid JSON array of records.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Widget configuration errors (bad base URL, invalid TOML).
    #[error("config error: {message}")]
    Config { message: String },
}

/// A specialized Result type for sift operations.
pub type Result<T> = std::result::Result<T, SiftError>;

impl SiftError {
    /// Create a load error.
    pub fn load(message: impl Into<String>) -> Self {
        Self::Load {
            message: message.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error should trigger fail-soft behavior.
    ///
    /// Every sift error is caught at a load or config boundary and collapsed
    /// into a safe default. This method returns true for all error types.
    pub fn is_fail_soft(&self) -> bool {
        true
    }
}

impl From<serde_json::Error> for SiftError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for SiftError {
    fn from(err: reqwest::Error) -> Self {
        Self::Load {
            message: err.to_string(),
        }
    }
}

/// Trait for fail-soft error handling.
///
/// Provides methods for handling errors according to sift's fail-soft
/// philosophy: log the error to the diagnostic channel and return a safe
/// default.
pub trait FailSoft<T> {
    /// Handle an error by logging it and returning the default value.
    fn fail_soft_default(self, context: &str) -> T
    where
        T: Default;

    /// Handle an error by logging it and returning the provided fallback.
    fn fail_soft_with(self, context: &str, fallback: T) -> T;
}

impl<T> FailSoft<T> for Result<T> {
    fn fail_soft_default(self, context: &str) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(err) => {
                tracing::error!("{}: {} (fail-soft: using default)", context, err);
                T::default()
            }
        }
    }

    fn fail_soft_with(self, context: &str, fallback: T) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                tracing::error!("{}: {} (fail-soft: using fallback)", context, err);
                fallback
            }
        }
    }
}
