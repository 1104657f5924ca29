//! Game configuration
//!
//! Loaded from an optional TOML file; command-line flags override it.

use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

/// Word list name that selects the list compiled into the binary
pub const EMBEDDED_WORDLIST: &str = "embedded";

/// Game configuration, loadable from TOML
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Wrong guesses allowed before the game ends
    pub mistake_limit: u32,
    /// Number of letter boxes shown before the first word arrives
    pub word_length: usize,
    /// Upper bound on a single word fetch
    pub fetch_timeout_ms: u64,
    /// `"embedded"` or a path to a newline-separated word list
    pub wordlist: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mistake_limit: 5,
            word_length: 6,
            fetch_timeout_ms: 5000,
            wordlist: EMBEDDED_WORDLIST.to_string(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file and validate it
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, is not valid TOML,
    /// or holds out-of-range values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist
    ///
    /// # Errors
    /// See [`GameConfig::load`].
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Check value ranges
    ///
    /// # Errors
    /// Returns `ConfigError::Validation` naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mistake_limit == 0 {
            return Err(ConfigError::Validation(
                "mistake_limit must be >= 1".to_string(),
            ));
        }
        if self.word_length == 0 {
            return Err(ConfigError::Validation("word_length must be >= 1".to_string()));
        }
        if self.fetch_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "fetch_timeout_ms must be >= 1".to_string(),
            ));
        }
        if self.wordlist.trim().is_empty() {
            return Err(ConfigError::Validation(
                "wordlist must be \"embedded\" or a file path".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    #[must_use]
    pub fn uses_embedded_wordlist(&self) -> bool {
        self.wordlist == EMBEDDED_WORDLIST
    }
}
