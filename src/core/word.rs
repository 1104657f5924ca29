//! Round word representation
//!
//! A Word is the answer of one round: a non-empty run of letters, kept in the
//! case it was supplied in so guesses can be compared exactly.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// The answer of a round, validated to contain only letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

/// Error type for strings that cannot be a round word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("invalid input: word must be a non-empty string")]
    Empty,
    #[error("invalid input: '{ch}' is not a letter")]
    NotALetter { ch: char },
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed; case is preserved.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty after trimming
    /// - Any character is not alphabetic
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Word;
    ///
    /// let word = Word::new("purple").unwrap();
    /// assert_eq!(word.text(), "purple");
    /// assert_eq!(word.len(), 6);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("purp1e").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();
        let text = text.trim();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(ch) = text.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::NotALetter { ch });
        }

        Ok(Self {
            text: text.to_string(),
            letters: text.chars().collect(),
        })
    }

    /// Create a Word from text that must already be bare letters
    ///
    /// Like [`Word::new`] but surrounding whitespace is rejected instead of
    /// trimmed.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or holds any non-letter,
    /// whitespace included.
    pub fn exact(text: &str) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if let Some(ch) = text.chars().find(|c| c.is_whitespace()) {
            return Err(WordError::NotALetter { ch });
        }
        Ok(word)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: a Word cannot be constructed empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Exact, case-sensitive comparison against a guess
    #[inline]
    #[must_use]
    pub fn matches(&self, guess: &str) -> bool {
        self.text == guess
    }

    /// Count of each letter in the word
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<char, usize> {
        letter_counts(self.text.chars())
    }

    /// Check whether `other` uses exactly the same letters, in any order
    #[must_use]
    pub fn is_anagram_of(&self, other: &str) -> bool {
        other.chars().count() == self.len() && letter_counts(other.chars()) == self.letter_counts()
    }
}

fn letter_counts(chars: impl Iterator<Item = char>) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for ch in chars {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
