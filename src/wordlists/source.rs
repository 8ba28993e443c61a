//! Root word selection
//!
//! A `WordSource` holds the candidate root words and picks one whenever a round starts.

use super::START_WORDS;
use crate::core::normalize;
use super::loader::{WordListError, load_from_file, words_from_slice};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::path::Path;

/// Root word used when the candidate list is empty
pub const FALLBACK_ROOT: &str = "silkworm";

/// The finite list of candidate root words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSource {
    words: Vec<String>,
}

impl WordSource {
    /// Candidates compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(words_from_slice(START_WORDS))
    }

    /// Load candidates from a newline-delimited file
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::AssetMissing`] if the file cannot be read. Without a word
    /// list no round can start, so callers treat this as fatal.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let words = load_from_file(path)?;
        if words.is_empty() {
            tracing::warn!("root word list is empty, rounds will use '{FALLBACK_ROOT}'");
        }
        Ok(Self::from_words(words))
    }

    /// Build a source from in-memory words
    ///
    /// Words are trimmed and lowercased like file entries; blank ones are dropped.
    #[must_use]
    pub fn from_words(words: Vec<String>) -> Self {
        let words = words
            .into_iter()
            .map(|w| normalize(&w))
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Pick a root word uniformly at random
    ///
    /// Falls back to [`FALLBACK_ROOT`] when there are no candidates.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::wordlists::{FALLBACK_ROOT, WordSource};
    ///
    /// let source = WordSource::from_words(Vec::new());
    /// assert_eq!(source.pick_root(&mut rand::rng()), FALLBACK_ROOT);
    /// ```
    pub fn pick_root<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.words
            .choose(rng)
            .map_or(FALLBACK_ROOT, String::as_str)
    }
}

impl Default for WordSource {
    fn default() -> Self {
        Self::embedded()
    }
}
