//! Word list loading utilities
//!
//! Provides functions to parse word lists from text or files.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Parse a newline-separated word list
///
/// Blank lines and lines starting with `#` are skipped, as are entries that
/// are not valid words.
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("# colours\npurple\n\norange\nno way\n");
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_word_list_skips_comments_and_blanks() {
        let words = parse_word_list("# header\n\n  purple  \n#garden\nrocket\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["purple", "rocket"]);
    }

    #[test]
    fn parse_word_list_empty() {
        assert!(parse_word_list("").is_empty());
        assert!(parse_word_list("\n# nothing\n").is_empty());
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/definitely/not/here/words.txt").is_err());
    }

    #[test]
    fn load_from_file_reads_words() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "# colours\npurple\norange\nno way\n").unwrap();

        let words = load_from_file(&path).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["purple", "orange"]);
    }

    #[test]
    fn embedded_words_all_parse() {
        use crate::wordlists::WORDS;

        let words = parse_word_list(&WORDS.join("\n"));
        assert_eq!(words.len(), WORDS.len());
    }
}
