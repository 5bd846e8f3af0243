//! Rendering ResultSets into list items.
//!
//! Rendering is a full clear-and-rebuild on every query: the previous
//! contents of the results container are replaced wholesale with one item
//! per record. No diffing, no virtualization. The result cap keeps this
//! cheap. Rendering the same ResultSet twice produces identical output.

use crate::record::Record;

/// One rendered entry in the results list.
///
/// Corresponds to a list item holding a link (href = permalink, visible
/// text = title) followed by a small secondary text node carrying the
/// pre-formatted date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Link target.
    pub href: String,
    /// Visible link text.
    pub text: String,
    /// Secondary text, a leading space plus the record's date.
    pub secondary: String,
}

impl ListItem {
    fn from_record(record: &Record) -> Self {
        Self {
            href: record.permalink.clone(),
            text: record.title.clone(),
            secondary: format!(" {}", record.date),
        }
    }
}

/// Build list items for a ResultSet, in ResultSet order.
pub fn list_items(results: &[&Record]) -> Vec<ListItem> {
    results.iter().map(|r| ListItem::from_record(r)).collect()
}

/// Render list items as HTML `<li>` elements.
///
/// Text and attribute content is escaped; record fields come from an
/// external index file and cannot be trusted as raw markup.
pub fn to_html(items: &[ListItem]) -> String {
    let mut html = String::new();
    for item in items {
        html.push_str("<li><a href=\"");
        html.push_str(&escape(&item.href));
        html.push_str("\">");
        html.push_str(&escape(&item.text));
        html.push_str("</a><small>");
        html.push_str(&escape(&item.secondary));
        html.push_str("</small></li>");
    }
    html
}

/// Minimal HTML escaping for text and double-quoted attribute values.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
