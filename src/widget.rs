//! The search widget: one instance per page, explicit two-phase init.
//!
//! The widget owns the loaded index as a field; there is no module-level
//! mutable state. The composition root mounts the widget against a
//! surface, runs `load()` once, then `attach_listeners()`. Input events
//! arriving before listeners attach are dropped, not queued, preserving
//! the guarantee that no query runs against a half-initialized index.
//!
//! Event handling is synchronous: each input event fully computes and
//! renders its ResultSet before the next event can be dispatched, so no
//! cancellation or locking is needed.

use crate::config::WidgetConfig;
use crate::fetch::{load_index, IndexFetcher};
use crate::query::{result_set, QueryState};
use crate::record::Record;
use crate::render::list_items;
use crate::surface::Surface;

/// A mounted search widget.
///
/// Constructed via [`SearchWidget::mount`], which declines (returns
/// `None`) when the surface's page elements are absent. The index starts
/// empty; until [`SearchWidget::load`] runs, every query returns nothing.
#[derive(Debug)]
pub struct SearchWidget<S: Surface> {
    surface: S,
    config: WidgetConfig,
    index: Vec<Record>,
    listening: bool,
    state: QueryState,
}

impl<S: Surface> SearchWidget<S> {
    /// Mount a widget on a surface.
    ///
    /// Returns `None` when the surface reports its elements missing; the
    /// widget then does nothing for the rest of the page view. This is a
    /// silent no-op by contract, logged at debug level only.
    pub fn mount(surface: S, config: WidgetConfig) -> Option<Self> {
        if !surface.is_ready() {
            tracing::debug!(
                input_id = %config.input_id,
                results_id = %config.results_id,
                "search elements absent, widget not mounted"
            );
            return None;
        }
        Some(Self {
            surface,
            config,
            index: Vec::new(),
            listening: false,
            state: QueryState::Idle,
        })
    }

    /// Phase one: load the index through the given fetcher.
    ///
    /// Fail-soft: any load or parse failure leaves the index empty for
    /// the rest of the page view, with a diagnostic on the error channel.
    /// Runs once per widget lifetime, before listeners attach.
    pub fn load(&mut self, fetcher: &dyn IndexFetcher) {
        self.index = load_index(fetcher);
        tracing::debug!(records = self.index.len(), "search index loaded");
    }

    /// Phase two: start reacting to input events.
    ///
    /// Sequenced after [`SearchWidget::load`] by the composition root, so
    /// the index write happens-before any read.
    pub fn attach_listeners(&mut self) {
        self.listening = true;
    }

    /// Handle one input-change event.
    ///
    /// Trims the raw value; an empty result means `Idle` (clear rendered
    /// results immediately), anything else means `Filtering` (render the
    /// capped ResultSet). Events before `attach_listeners` are ignored.
    pub fn on_input(&mut self, raw: &str) {
        if !self.listening {
            return;
        }

        self.state = QueryState::classify(raw);
        match self.state {
            QueryState::Idle => self.surface.clear_results(),
            QueryState::Filtering => {
                let results = result_set(&self.index, raw, self.config.max_results);
                self.surface.replace_results(&list_items(&results));
            }
        }
    }

    /// Current state of the query handler.
    pub fn state(&self) -> QueryState {
        self.state
    }

    /// Number of records in the loaded index.
    pub fn index_len(&self) -> usize {
        self.index.len()
    }

    /// The surface this widget renders into.
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
