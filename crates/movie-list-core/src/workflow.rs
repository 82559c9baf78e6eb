// Search-and-collect workflow state machine

use movie_list_lookup::MovieLookup;
use movie_list_models::{LookupOutcome, Movie};
use tracing::debug;

use crate::collection::{append_unique_by_title, CollectionStore};

/// Transient state of one search-and-collect form instance.
///
/// Transitions are pure and synchronous except `submit`, which drives one
/// lookup. Nothing gates submission on `is_loading`: overlapping submits are
/// possible and the last response to land wins, matching the UI this
/// replaces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowState {
    /// Current input text.
    pub query: String,
    /// Movie held between a successful lookup and "add" (or a new search).
    pub preview: Option<Movie>,
    /// Set when the last lookup failed; cleared on every query edit.
    pub has_error: bool,
    /// True strictly during the in-flight request window.
    pub is_loading: bool,
}

impl WorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the query text, unconditionally re-arming the error display.
    ///
    /// The preview is deliberately left alone; only "add" or a later
    /// successful search replaces it.
    pub fn edit_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.has_error = false;
    }

    /// Submission is disabled while the query is empty. Loading state does
    /// not gate it.
    pub fn can_submit(&self) -> bool {
        !self.query.is_empty()
    }

    /// Mark the request window open.
    pub fn begin_search(&mut self) {
        self.is_loading = true;
    }

    /// Fold a lookup outcome back into the form state.
    ///
    /// On `NotFound` a stale preview from an earlier search stays visible
    /// behind the error flag. On `Found` the error flag is not explicitly
    /// cleared; success is only reachable after an edit already cleared it.
    pub fn apply_outcome(&mut self, outcome: LookupOutcome) {
        self.is_loading = false;

        match outcome {
            LookupOutcome::Found(movie) => {
                debug!("apply_outcome: preview set title={:?}", movie.title);
                self.preview = Some(movie);
            }
            LookupOutcome::NotFound(message) => {
                debug!("apply_outcome: lookup failed: {}", message);
                self.has_error = true;
            }
        }
    }

    /// Guarded submit: one lookup against the provider, outcome folded into
    /// state. Returns whether this submission produced a preview.
    pub async fn submit(&mut self, lookup: &dyn MovieLookup) -> bool {
        if !self.can_submit() {
            debug!("submit: empty query, not submitting");
            return false;
        }

        self.begin_search();
        let outcome = lookup.lookup(&self.query).await;
        let found = outcome.is_found();
        self.apply_outcome(outcome);
        found
    }

    /// Move the previewed movie into the collection.
    ///
    /// Duplicates (by exact title) leave the list untouched, but the form
    /// always resets: preview and query are cleared either way. Without a
    /// preview this is a no-op. Returns whether the list grew.
    pub fn add_to_collection(&mut self, store: &mut dyn CollectionStore) -> bool {
        let Some(movie) = self.preview.take() else {
            return false;
        };

        let added = append_unique_by_title(store, movie);
        self.query.clear();
        added
    }
}
