//! Letter scrambling
//!
//! Produces a uniformly random permutation of a word's letters using a
//! Fisher-Yates shuffle. The result is not forced to differ from the input.

use super::word::{Word, WordError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Shuffle the letters of `word` with the given random source
///
/// Unlike [`Word::new`], surrounding whitespace is not trimmed away: it
/// counts as a non-letter.
///
/// # Errors
/// Returns `WordError` if `word` is empty or contains a non-letter.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use word_scramble::core::{Word, scramble_with};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let scrambled = scramble_with("purple", &mut rng).unwrap();
/// assert!(Word::new("purple").unwrap().is_anagram_of(&scrambled));
/// ```
pub fn scramble_with<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Result<String, WordError> {
    let word = Word::exact(word)?;
    Ok(shuffle_word(&word, rng))
}

/// Shuffle an already validated word
pub fn shuffle_word<R: Rng + ?Sized>(word: &Word, rng: &mut R) -> String {
    let mut letters = word.letters().to_vec();
    letters.shuffle(rng);
    letters.into_iter().collect()
}

/// Scrambler owning its random source
///
/// Seed it for reproducible rounds, or use [`Scrambler::from_entropy`].
#[derive(Debug, Clone)]
pub struct Scrambler<R = StdRng> {
    rng: R,
}

impl Scrambler<StdRng> {
    /// Create a scrambler seeded from the operating system
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Create a deterministic scrambler
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Scrambler<R> {
    /// Create a scrambler around an existing random source
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Scramble a raw string
    ///
    /// # Errors
    /// Returns `WordError` if `word` is empty or contains a non-letter.
    pub fn scramble(&mut self, word: &str) -> Result<String, WordError> {
        scramble_with(word, &mut self.rng)
    }

    /// Scramble a validated word
    pub fn scramble_word(&mut self, word: &Word) -> String {
        shuffle_word(word, &mut self.rng)
    }
}
