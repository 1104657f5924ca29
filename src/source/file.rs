//! Word source reading a word list from disk on every fetch

use super::{WordSource, pick_random};
use crate::error::WordSourceError;
use crate::wordlists::loader::parse_word_list;
use std::path::PathBuf;

/// Draws a random word from a newline-separated file
///
/// The file is re-read on each fetch, so edits show up in the next round.
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl WordSource for FileWordSource {
    async fn fetch_word(&self) -> Result<String, WordSourceError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            WordSourceError::Network(format!("failed to read {}: {e}", self.path.display()))
        })?;

        let words = parse_word_list(&content);
        tracing::debug!(path = %self.path.display(), count = words.len(), "word list read");

        pick_random(&words)
            .map(|word| word.text().to_string())
            .ok_or(WordSourceError::EmptyResult)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn temp_list(content: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[tokio::test]
    async fn reads_word_from_file() {
        let (_dir, path) = temp_list("# list\npurple\n");
        let source = FileWordSource::new(&path);
        assert_eq!(source.fetch_word().await.as_deref(), Ok("purple"));
    }

    #[tokio::test]
    async fn file_without_words_is_empty_result() {
        let (_dir, path) = temp_list("\n# nothing here\n12345\n");
        let source = FileWordSource::new(&path);
        assert_eq!(source.fetch_word().await, Err(WordSourceError::EmptyResult));
    }

    #[tokio::test]
    async fn edits_show_up_on_next_fetch() {
        let (_dir, path) = temp_list("purple\n");
        let source = FileWordSource::new(&path);
        assert_eq!(source.fetch_word().await.as_deref(), Ok("purple"));

        std::fs::write(&path, "garden\n").unwrap();
        assert_eq!(source.fetch_word().await.as_deref(), Ok("garden"));
    }

    #[tokio::test]
    async fn missing_file_is_network_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileWordSource::new(dir.path().join("missing.txt"));
        assert!(matches!(
            source.fetch_word().await,
            Err(WordSourceError::Network(_))
        ));
    }
}
