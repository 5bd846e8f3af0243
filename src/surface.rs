//! The surface seam: where rendered results land.
//!
//! A [`Surface`] stands in for the page elements the widget controls: a
//! text input and a results container. The widget only ever replaces or
//! clears the container's contents; it never reads the page back. If the
//! expected elements are absent the surface reports not-ready and the
//! widget silently declines to mount. Elements appearing later are not
//! observed (no retry, no mutation watching).

use crate::render::{to_html, ListItem};

/// Sink for rendered search results.
pub trait Surface {
    /// True when both the input element and the results container exist.
    fn is_ready(&self) -> bool;

    /// Replace the entire contents of the results container.
    fn replace_results(&mut self, items: &[ListItem]);

    /// Clear the results container. Equivalent to replacing with nothing.
    fn clear_results(&mut self) {
        self.replace_results(&[]);
    }
}

/// Surface that renders results into an HTML string buffer.
///
/// Embedders hand the buffer to whatever actually owns the page: a
/// templating layer, a webview bridge, a server-side preview.
#[derive(Debug, Clone, Default)]
pub struct HtmlSurface {
    html: String,
}

impl HtmlSurface {
    /// Create an empty, ready surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current rendered contents of the results container.
    pub fn html(&self) -> &str {
        &self.html
    }
}

impl Surface for HtmlSurface {
    fn is_ready(&self) -> bool {
        true
    }

    fn replace_results(&mut self, items: &[ListItem]) {
        self.html = to_html(items);
    }
}

/// In-memory surface for testing.
///
/// Records every render so tests can assert on the latest contents and
/// on how many renders occurred. Can be constructed detached to exercise
/// the silent no-op path when page elements are missing.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    detached: bool,
    items: Vec<ListItem>,
    render_count: usize,
}

impl MemorySurface {
    /// Create a ready surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface whose page elements are absent.
    pub fn detached() -> Self {
        Self {
            detached: true,
            ..Self::default()
        }
    }

    /// The most recently rendered items.
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Number of renders (replacements and clears) performed.
    pub fn render_count(&self) -> usize {
        self.render_count
    }
}

impl Surface for MemorySurface {
    fn is_ready(&self) -> bool {
        !self.detached
    }

    fn replace_results(&mut self, items: &[ListItem]) {
        self.items = items.to_vec();
        self.render_count += 1;
    }
}
