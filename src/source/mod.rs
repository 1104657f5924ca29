//! Word sources
//!
//! A word source supplies the answer for the next round. Fetching is async
//! and may fail; [`fetch_with_timeout`] bounds how long a round start may
//! wait.

mod embedded;
mod file;
mod scripted;

pub use embedded::EmbeddedWordSource;
pub use file::FileWordSource;
pub use scripted::ScriptedWordSource;

use crate::config::GameConfig;
use crate::error::WordSourceError;
use std::future::Future;
use std::time::Duration;

/// Supplier of round words
pub trait WordSource {
    /// Fetch one candidate word
    ///
    /// The engine validates the word; sources only report transport failures
    /// (`Network`) or the absence of any word (`EmptyResult`).
    fn fetch_word(&self) -> impl Future<Output = Result<String, WordSourceError>> + Send;
}

/// Source selected by the `wordlist` setting
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Embedded(EmbeddedWordSource),
    File(FileWordSource),
}

impl ConfiguredSource {
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        if config.uses_embedded_wordlist() {
            Self::Embedded(EmbeddedWordSource::new())
        } else {
            Self::File(FileWordSource::new(&config.wordlist))
        }
    }
}

impl WordSource for ConfiguredSource {
    async fn fetch_word(&self) -> Result<String, WordSourceError> {
        match self {
            Self::Embedded(source) => source.fetch_word().await,
            Self::File(source) => source.fetch_word().await,
        }
    }
}

/// Fetch a word, failing with `Network` if `timeout` elapses first
///
/// # Errors
/// Propagates the source's error, or `WordSourceError::Network` on timeout.
pub async fn fetch_with_timeout<S: WordSource>(
    source: &S,
    timeout: Duration,
) -> Result<String, WordSourceError> {
    match tokio::time::timeout(timeout, source.fetch_word()).await {
        Ok(fetched) => fetched,
        Err(_) => {
            tracing::warn!(timeout_ms = timeout.as_millis(), "word fetch timed out");
            Err(WordSourceError::Network(format!(
                "timed out after {}ms",
                timeout.as_millis()
            )))
        }
    }
}

/// Pick a random entry from a non-empty list
fn pick_random<T: Clone>(items: &[T]) -> Option<T> {
    use rand::prelude::IndexedRandom;

    items.choose(&mut rand::rng()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SlowSource;

    impl WordSource for SlowSource {
        async fn fetch_word(&self) -> Result<String, WordSourceError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok("purple".to_string())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_maps_to_network_error() {
        let result = fetch_with_timeout(&SlowSource, Duration::from_millis(50)).await;
        assert_eq!(
            result,
            Err(WordSourceError::Network("timed out after 50ms".to_string()))
        );
    }

    #[tokio::test]
    async fn fast_source_passes_through() {
        let source = ScriptedWordSource::new([Ok("garden".to_string())]);
        let result = fetch_with_timeout(&source, Duration::from_secs(1)).await;
        assert_eq!(result.as_deref(), Ok("garden"));
    }

    #[test]
    fn configured_source_follows_wordlist_setting() {
        let config = GameConfig::default();
        assert!(matches!(
            ConfiguredSource::from_config(&config),
            ConfiguredSource::Embedded(_)
        ));

        let config = GameConfig {
            wordlist: "words.txt".to_string(),
            ..GameConfig::default()
        };
        assert!(matches!(
            ConfiguredSource::from_config(&config),
            ConfiguredSource::File(_)
        ));
    }

    #[tokio::test]
    async fn configured_embedded_source_yields_a_word() {
        let source = ConfiguredSource::from_config(&GameConfig::default());
        let word = source.fetch_word().await.unwrap();
        assert!(crate::wordlists::WORDS.contains(&word.as_str()));
    }

    #[test]
    fn pick_random_from_empty_is_none() {
        let empty: [&str; 0] = [];
        assert_eq!(pick_random(&empty), None);
        assert_eq!(pick_random(&["only"]), Some("only"));
    }
}
