//! Stateful converter session for a live rune text box.
//!
//! `ConverterSession` owns the typed text and its current transliteration,
//! applies edit events, and returns responses the UI renders directly
//! (rune string, legend of distinct runes, unknown letters).

mod handlers;
mod response;
mod types;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use rune_core::{RuneTable, Transliteration};

pub use types::{EditEvent, SessionResponse, MAX_INPUT_CHARS};

pub struct ConverterSession {
    table: Arc<RuneTable>,
    text: String,
    /// Cached `text.chars().count()`.
    char_count: usize,
    result: Transliteration,
}

impl ConverterSession {
    pub fn new(table: Arc<RuneTable>) -> Self {
        Self {
            table,
            text: String::new(),
            char_count: 0,
            result: Transliteration::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn result(&self) -> &Transliteration {
        &self.result
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Re-run the scan over the whole text. A digraph may span the edit
    /// point, so partial updates are not safe.
    fn refresh(&mut self) {
        self.char_count = self.text.chars().count();
        self.result = self.table.transliterate(&self.text);
    }
}

impl Default for ConverterSession {
    /// Session over a copy of the global rune table.
    fn default() -> Self {
        Self::new(Arc::new(RuneTable::global().clone()))
    }
}
