//! Word Scramble
//!
//! A word-unscrambling game: a random word is fetched, its letters are
//! shuffled, and the player rebuilds it one letter box at a time before
//! running out of tries.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::config::GameConfig;
//! use word_scramble::engine::{GameEngine, Outcome, RoundEvent};
//!
//! let mut engine = GameEngine::seeded(&GameConfig::default(), 7);
//! let ticket = engine.begin_round().unwrap();
//! let event = engine.complete_round(ticket, Ok("purple".to_string())).unwrap();
//! assert!(matches!(event, RoundEvent::Started { .. }));
//!
//! let outcome = engine.evaluate(Some("purple")).unwrap();
//! assert!(matches!(outcome, Outcome::Correct { .. }));
//! ```

// Core domain types
pub mod core;

// Round and score state machine
pub mod engine;

// Error types
pub mod error;

// Configuration
pub mod config;

// Where round words come from
pub mod source;

// Async engine driver
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
