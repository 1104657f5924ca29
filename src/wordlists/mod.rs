//! Word lists for scramble rounds
//!
//! Provides the embedded word list compiled into the binary, plus helpers to
//! parse word lists read from disk.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
