//! Error types
//!
//! Word source, round start, engine and configuration failures.

use std::path::PathBuf;

use crate::core::WordError;

/// Failures of a word source while starting a round
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordSourceError {
    #[error("word source unreachable: {0}")]
    Network(String),

    #[error("no word received from word source")]
    EmptyResult,
}

/// Why a round failed to start
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error(transparent)]
    Source(#[from] WordSourceError),

    #[error(transparent)]
    InvalidWord(#[from] WordError),
}

/// Coarse failure class handed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    EmptyResult,
    InvalidInput,
}

impl RoundError {
    /// Classify the failure
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Source(WordSourceError::Network(_)) => FailureKind::Network,
            Self::Source(WordSourceError::EmptyResult) => FailureKind::EmptyResult,
            Self::InvalidWord(_) => FailureKind::InvalidInput,
        }
    }

    /// Message suitable for showing to the player
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            FailureKind::Network => "Unable to connect to server. Please try again later.",
            FailureKind::EmptyResult => "No word available. Please try again.",
            FailureKind::InvalidInput => "An unexpected error occurred. Please try again later.",
        }
    }
}

/// Operations the engine refuses in its current state
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("no round is active")]
    NoActiveRound,

    #[error("game is over after {success_count} words; start a new game")]
    GameOver { success_count: u32 },

    #[error("round result does not belong to the outstanding fetch")]
    StaleTicket,
}

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
