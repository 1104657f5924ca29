//! One-shot scramble command

use crate::core::{Scrambler, WordError};

/// Scramble a single word, reproducibly when `seed` is given
///
/// # Errors
/// Returns `WordError` if `word` is empty or contains a non-letter.
pub fn scramble_once(word: &str, seed: Option<u64>) -> Result<String, WordError> {
    let mut scrambler = match seed {
        Some(seed) => Scrambler::seeded(seed),
        None => Scrambler::from_entropy(),
    };
    scrambler.scramble(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn scramble_is_anagram() {
        let scrambled = scramble_once("garden", None).unwrap();
        assert!(Word::new("garden").unwrap().is_anagram_of(&scrambled));
    }

    #[test]
    fn same_seed_same_scramble() {
        assert_eq!(
            scramble_once("orange", Some(42)),
            scramble_once("orange", Some(42))
        );
    }

    #[test]
    fn rejects_invalid_words() {
        assert_eq!(scramble_once("", Some(1)), Err(WordError::Empty));
        assert_eq!(
            scramble_once(" garden", Some(1)),
            Err(WordError::NotALetter { ch: ' ' })
        );
        assert!(matches!(
            scramble_once("ab1", Some(1)),
            Err(WordError::NotALetter { ch: '1' })
        ));
    }
}
