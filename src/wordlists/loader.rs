//! Word list loading utilities
//!
//! Reads newline-delimited word list files from disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for word lists that cannot be loaded
#[derive(Debug, Error)]
pub enum WordListError {
    /// The file is missing or could not be read
    #[error("word list {} could not be read: {source}", .path.display())]
    AssetMissing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load words from a file, one per line
///
/// Lines are trimmed and lowercased; blank lines are skipped. The file is read in
/// full and closed before this returns.
///
/// # Errors
///
/// Returns [`WordListError::AssetMissing`] if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::AssetMissing {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<String> = parse_lines(&content);
    tracing::info!(path = %path.display(), count = words.len(), "loaded word list");

    Ok(words)
}

/// Split text on newlines into normalized, non-empty words
#[must_use]
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect()
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
