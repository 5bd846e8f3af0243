//! Sift - Embeddable substring search for static site indexes
//!
//! Sift loads a small, pre-built JSON index of site content (title,
//! summary, permalink, date) and wires an input source to a results list:
//! case-insensitive substring matching over two fields, a capped
//! order-preserving result set, and a full clear-and-rebuild render per
//! keystroke. Loading is fail-soft: a broken index degrades the page to
//! "search returns nothing" instead of breaking page load.
//!
//! The typical composition root mounts a widget, loads the index once,
//! then attaches listeners:
//!
//! ```
//! use sift::{MemoryFetcher, MemorySurface, SearchWidget, WidgetConfig};
//!
//! let surface = MemorySurface::new();
//! if let Some(mut widget) = SearchWidget::mount(surface, WidgetConfig::default()) {
//!     let fetcher = MemoryFetcher::ok(r#"[{"title": "Hello", "permalink": "/h"}]"#);
//!     widget.load(&fetcher);
//!     widget.attach_listeners();
//!     widget.on_input("hel");
//!     assert_eq!(widget.surface().items().len(), 1);
//! }
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod matcher;
pub mod query;
pub mod record;
pub mod render;
pub mod surface;
pub mod widget;

pub use config::{WidgetConfig, DEFAULT_MAX_RESULTS};
pub use error::{FailSoft, Result, SiftError};
#[cfg(feature = "http")]
pub use fetch::HttpFetcher;
pub use fetch::{load_index, FileFetcher, IndexFetcher, MemoryFetcher};
pub use matcher::matches;
pub use query::{result_set, QueryState};
pub use record::Record;
pub use render::{list_items, to_html, ListItem};
pub use surface::{HtmlSurface, MemorySurface, Surface};
pub use widget::SearchWidget;
