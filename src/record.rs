//! The searchable record model.
//!
//! Records are produced by an external build step as a JSON array and
//! consumed here as an opaque, pre-formatted file. The widget never mutates
//! them: the index is written once on load and read-only thereafter.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One searchable unit of site content.
///
/// All four fields are display strings. Deserialization is null-safe:
/// an absent, null, or non-string field becomes the empty string rather
/// than failing the whole index. Extra fields in the source JSON are
/// ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Page title, matched against the query.
    #[serde(default, deserialize_with = "lossy_string")]
    pub title: String,
    /// Page summary, matched against the query.
    #[serde(default, deserialize_with = "lossy_string")]
    pub summary: String,
    /// Link target, relative or absolute URL. Never matched.
    #[serde(default, deserialize_with = "lossy_string")]
    pub permalink: String,
    /// Pre-formatted publication date, displayed verbatim. Never matched.
    #[serde(default, deserialize_with = "lossy_string")]
    pub date: String,
}

impl Record {
    /// Create a record from its four display fields.
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        permalink: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            permalink: permalink.into(),
            date: date.into(),
        }
    }
}

/// Deserialize any JSON value into a string, treating non-strings as empty.
///
/// Index files are produced by external tooling; a null or numeric field
/// must not sink the entire index.
fn lossy_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        _ => String::new(),
    })
}
