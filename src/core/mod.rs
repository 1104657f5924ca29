//! Core domain types for the scramble game
//!
//! This module contains the pure building blocks: the round word, the
//! scrambler and the guess assembler. Nothing here performs I/O.

mod assembler;
mod scramble;
mod word;

pub use assembler::{GuessAssembler, SlotError};
pub use scramble::{Scrambler, scramble_with, shuffle_word};
pub use word::{Word, WordError};
