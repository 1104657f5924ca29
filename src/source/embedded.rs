//! Word source backed by the list compiled into the binary

use super::{WordSource, pick_random};
use crate::error::WordSourceError;
use crate::wordlists::WORDS;
use std::future::Future;

/// Draws a random six-letter word from the embedded list
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedWordSource {
    words: &'static [&'static str],
}

impl EmbeddedWordSource {
    #[must_use]
    pub const fn new() -> Self {
        Self { words: WORDS }
    }

    /// Use a different static list
    #[must_use]
    pub const fn with_words(words: &'static [&'static str]) -> Self {
        Self { words }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for EmbeddedWordSource {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSource for EmbeddedWordSource {
    fn fetch_word(&self) -> impl Future<Output = Result<String, WordSourceError>> + Send {
        let picked = pick_random(self.words).map(str::to_string);
        async move { picked.ok_or(WordSourceError::EmptyResult) }
    }
}
