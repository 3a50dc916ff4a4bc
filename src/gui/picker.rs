//! gui/picker.rs
//! Result picker state (the modal list of search hits).
//!
//! Rendering lives in `view/picker.rs`.

use crate::core::types::SearchResult;

#[derive(Debug, Clone)]
pub(crate) struct ResultPicker {
    results: Vec<SearchResult>,
    highlighted: Option<usize>,
}

impl ResultPicker {
    pub(crate) fn new(results: Vec<SearchResult>) -> Self {
        Self {
            results,
            highlighted: None,
        }
    }

    /// Titles in the order the search returned them.
    pub(crate) fn titles(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|r| r.title.as_str())
    }

    pub(crate) fn len(&self) -> usize {
        self.results.len()
    }

    pub(crate) fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Out-of-range indexes are ignored.
    pub(crate) fn highlight(&mut self, index: usize) {
        if index < self.results.len() {
            self.highlighted = Some(index);
        }
    }

    /// The highlighted result, if any. `None` keeps the picker open.
    pub(crate) fn selection(&self) -> Option<SearchResult> {
        self.highlighted
            .and_then(|i| self.results.get(i))
            .cloned()
    }
}
