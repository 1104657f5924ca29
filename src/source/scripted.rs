//! Word source that replays canned results

use super::WordSource;
use crate::error::WordSourceError;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Replays queued fetch results in order
///
/// Once the queue runs dry every fetch yields `EmptyResult`. Clones share the
/// queue and the call counter.
#[derive(Debug, Clone, Default)]
pub struct ScriptedWordSource {
    script: Arc<Mutex<VecDeque<Result<String, WordSourceError>>>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedWordSource {
    pub fn new(script: impl IntoIterator<Item = Result<String, WordSourceError>>) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into_iter().collect())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Convenience constructor for a run of successful fetches
    pub fn words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(words.into_iter().map(|w| Ok(w.to_string())))
    }

    /// Queue another result
    pub fn push(&self, result: Result<String, WordSourceError>) {
        self.script().push_back(result);
    }

    /// Number of fetches performed so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next(&self) -> Result<String, WordSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script()
            .pop_front()
            .unwrap_or(Err(WordSourceError::EmptyResult))
    }

    /// The queue stays usable after a panic in another holder
    fn script(&self) -> MutexGuard<'_, VecDeque<Result<String, WordSourceError>>> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl WordSource for ScriptedWordSource {
    async fn fetch_word(&self) -> Result<String, WordSourceError> {
        self.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_in_order_then_runs_dry() {
        let source = ScriptedWordSource::new([
            Ok("purple".to_string()),
            Err(WordSourceError::Network("HTTP 503".to_string())),
        ]);

        assert_eq!(source.fetch_word().await.as_deref(), Ok("purple"));
        assert!(matches!(
            source.fetch_word().await,
            Err(WordSourceError::Network(_))
        ));
        assert_eq!(source.fetch_word().await, Err(WordSourceError::EmptyResult));
        assert_eq!(source.calls(), 3);
    }

    #[tokio::test]
    async fn clones_share_script() {
        let source = ScriptedWordSource::words(["a", "b"]);
        let clone = source.clone();
        assert_eq!(clone.fetch_word().await.as_deref(), Ok("a"));
        source.push(Ok("c".to_string()));
        assert_eq!(source.fetch_word().await.as_deref(), Ok("b"));
        assert_eq!(source.fetch_word().await.as_deref(), Ok("c"));
        assert_eq!(clone.calls(), 3);
    }

    #[tokio::test]
    async fn poisoned_queue_keeps_results() {
        let source = ScriptedWordSource::words(["purple"]);
        let holder = source.clone();
        let panicked = std::thread::spawn(move || {
            let _guard = holder.script.lock().unwrap();
            panic!("poison the queue");
        })
        .join();
        assert!(panicked.is_err());
        assert!(source.script.is_poisoned());

        source.push(Ok("garden".to_string()));
        assert_eq!(source.fetch_word().await.as_deref(), Ok("purple"));
        assert_eq!(source.fetch_word().await.as_deref(), Ok("garden"));
    }
}
