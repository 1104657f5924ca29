//! Guess assembly from single-letter slots
//!
//! One slot per letter of the round word. A guess counts as complete as soon
//! as the last slot holds a letter, even if earlier slots were skipped.

use thiserror::Error;

/// Rejected slot input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("slot {index} is out of range (guess has {len} slots)")]
    OutOfRange { index: usize, len: usize },
    #[error("a slot holds exactly one character")]
    NotSingleCharacter,
    #[error("whitespace is not allowed in a slot")]
    Whitespace,
}

/// Ordered character slots making up the player's guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessAssembler {
    slots: Vec<Option<char>>,
}

impl GuessAssembler {
    /// Create an assembler with `len` empty slots
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Number of slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Current slot contents
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    /// Value of a single slot, `None` if empty or out of range
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    /// Write one character into a slot
    ///
    /// # Errors
    /// Returns `SlotError` if the index is out of range, the input is not
    /// exactly one character, or the character is whitespace.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::GuessAssembler;
    ///
    /// let mut guess = GuessAssembler::new(3);
    /// guess.set_slot(0, "c").unwrap();
    /// assert!(guess.set_slot(1, "at").is_err());
    /// assert!(guess.set_slot(1, " ").is_err());
    /// ```
    pub fn set_slot(&mut self, index: usize, input: &str) -> Result<(), SlotError> {
        let mut chars = input.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return Err(SlotError::NotSingleCharacter);
        };
        self.set_char(index, ch)
    }

    /// Write a character into a slot
    ///
    /// # Errors
    /// Returns `SlotError` if the index is out of range or `ch` is whitespace.
    pub fn set_char(&mut self, index: usize, ch: char) -> Result<(), SlotError> {
        if ch.is_whitespace() {
            return Err(SlotError::Whitespace);
        }
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(SlotError::OutOfRange { index, len })?;
        *slot = Some(ch);
        Ok(())
    }

    /// Empty a slot
    ///
    /// Returns `true` if the slot was already empty before the call, which is
    /// the signal to move focus backwards.
    ///
    /// # Errors
    /// Returns `SlotError::OutOfRange` for an invalid index.
    pub fn backspace_slot(&mut self, index: usize) -> Result<bool, SlotError> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(SlotError::OutOfRange { index, len })?;
        Ok(slot.take().is_none())
    }

    /// Empty every slot
    pub fn clear(&mut self) {
        self.slots.fill(None);
    }

    /// Re-shape for a new round word and clear
    pub fn resize(&mut self, len: usize) {
        self.slots.clear();
        self.slots.resize(len, None);
    }

    /// True exactly when the last slot holds a character
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.slots.last(), Some(Some(_)))
    }

    /// Concatenate the filled slots once the guess is complete
    #[must_use]
    pub fn assemble(&self) -> Option<String> {
        self.is_complete()
            .then(|| self.slots.iter().flatten().collect())
    }
}
