//! Keyboard and pointer selection over the suggestion dropdown.
//!
//! [`SuggestBox`] owns the transient search state: the raw query, the
//! current ranked results, and the cursor. It never navigates on its own —
//! committing a selection returns a [`NavIntent`] for the host's router.

use super::suggest::{Suggestion, rank};
use crate::catalog::Plant;

/// Navigation the host router should perform after a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavIntent {
    /// Open the detail view for one record.
    PlantDetail { id: String },
    /// Open the full-text results view for a raw query.
    SearchResults { query: String },
}

/// Keys the suggestion box reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Closed,
    /// Dropdown visible; `cursor` is `None` until an arrow key or hover
    /// highlights a row.
    Open { cursor: Option<usize> },
}

/// State container for the navbar search input and its dropdown.
#[derive(Debug, Default)]
pub struct SuggestBox {
    query: String,
    results: Vec<Suggestion>,
    state: State,
}

impl Default for State {
    fn default() -> Self {
        Self::Closed
    }
}

impl SuggestBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw query as typed, untrimmed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The current ranked results. Empty whenever the box is closed.
    pub fn results(&self) -> &[Suggestion] {
        &self.results
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open { .. })
    }

    /// The highlighted row, if any.
    pub fn cursor(&self) -> Option<usize> {
        match self.state {
            State::Open { cursor } => cursor,
            State::Closed => None,
        }
    }

    /// Replaces the query (one call per input change event) and re-ranks the
    /// catalog from scratch. Any previous highlight is discarded; a blank
    /// query closes the dropdown.
    pub fn set_query(&mut self, raw: &str, catalog: &[Plant]) {
        self.query = raw.to_string();

        if self.query.trim().is_empty() {
            self.close();
            return;
        }

        self.results = rank(catalog, &self.query);
        self.state = State::Open { cursor: None };
    }

    /// Focus regained with a non-blank query reopens the dropdown.
    pub fn focus(&mut self, catalog: &[Plant]) {
        if !self.query.trim().is_empty() {
            self.results = rank(catalog, &self.query);
            self.state = State::Open { cursor: None };
        }
    }

    /// Outside click: close the dropdown, keep the typed query.
    pub fn dismiss(&mut self) {
        self.close();
    }

    /// Applies one key event. Only `Enter` can produce a navigation intent.
    pub fn handle_key(&mut self, key: Key) -> Option<NavIntent> {
        let State::Open { cursor } = self.state else {
            return None;
        };

        match key {
            Key::ArrowDown => {
                // None → first row; otherwise advance, clamped to the end.
                if !self.results.is_empty() {
                    let next = cursor.map_or(0, |i| (i + 1).min(self.results.len() - 1));
                    self.state = State::Open { cursor: Some(next) };
                }
                None
            }
            Key::ArrowUp => {
                // Stepping above the first row clears the highlight.
                let next = match cursor {
                    Some(0) | None => None,
                    Some(i) => Some(i - 1),
                };
                self.state = State::Open { cursor: next };
                None
            }
            Key::Enter => match cursor {
                Some(index) => self.commit(index),
                None => self.commit_raw_query(),
            },
            // The host blurs the input; the query stays for a later refocus.
            Key::Escape => {
                self.close();
                None
            }
        }
    }

    /// A click on row `index` commits it, exactly like Enter with the cursor
    /// there. Out-of-range clicks (a stale row mid-rerender) are ignored.
    pub fn click(&mut self, index: usize) -> Option<NavIntent> {
        if self.is_open() && index < self.results.len() {
            self.commit(index)
        } else {
            None
        }
    }

    /// Hovering a row moves the highlight there.
    pub fn hover(&mut self, index: usize) {
        if self.is_open() && index < self.results.len() {
            self.state = State::Open {
                cursor: Some(index),
            };
        }
    }

    fn commit(&mut self, index: usize) -> Option<NavIntent> {
        let id = self.results.get(index)?.plant.id.clone();
        tracing::debug!(%id, "committed suggestion");
        self.reset();
        Some(NavIntent::PlantDetail { id })
    }

    fn commit_raw_query(&mut self) -> Option<NavIntent> {
        let query = self.query.trim().to_string();
        self.reset();
        if query.is_empty() {
            return None;
        }
        tracing::debug!(%query, "committed full-text search");
        Some(NavIntent::SearchResults { query })
    }

    /// Close and clear the query; used after a commit.
    fn reset(&mut self) {
        self.query.clear();
        self.close();
    }

    /// Close but keep the query; results are transient and dropped.
    fn close(&mut self) {
        self.results.clear();
        self.state = State::Closed;
    }
}
