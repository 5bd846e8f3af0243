//! Widget configuration.
//!
//! All configuration is optional. The widget runs with sensible defaults
//! when no config exists: the element ids and index location below match
//! the conventional markup emitted by static site generators. A site may
//! override them through a TOML fragment; loading failures fall back to
//! defaults rather than disabling search.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FailSoft, Result, SiftError};

/// Default cap on rendered results.
///
/// A full clear-and-rebuild render is acceptable at this size; no diffing
/// or virtualization is needed.
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// Default id of the text input element.
pub const DEFAULT_INPUT_ID: &str = "search-input";

/// Default id of the results list element.
pub const DEFAULT_RESULTS_ID: &str = "search-results";

/// Default index location, resolved against the page's base URL.
pub const DEFAULT_INDEX_LOCATION: &str = "index.json";

/// Configuration for a search widget instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WidgetConfig {
    /// Id of the text input element the widget listens to.
    pub input_id: String,
    /// Id of the list element the widget renders into.
    pub results_id: String,
    /// Location of the index document, relative to the base location.
    pub index_location: String,
    /// Maximum number of results rendered per query.
    pub max_results: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            input_id: DEFAULT_INPUT_ID.to_string(),
            results_id: DEFAULT_RESULTS_ID.to_string(),
            index_location: DEFAULT_INDEX_LOCATION.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl WidgetConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SiftError::config(format!("invalid TOML: {}", e)))
    }

    /// Load configuration from a TOML file, falling back to defaults.
    ///
    /// A missing file is not an error; a malformed one is logged to the
    /// diagnostic channel and ignored.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        fs::read_to_string(path)
            .map_err(|e| SiftError::config(format!("failed to read {}: {}", path.display(), e)))
            .and_then(|content| Self::from_toml_str(&content))
            .fail_soft_default("loading widget config")
    }
}
