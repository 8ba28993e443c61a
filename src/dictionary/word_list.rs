//! Spell checker backed by a word list

use super::{DEFAULT_LANGUAGE, SpellChecker, same_language};
use crate::wordlists::DICTIONARY_WORDS;
use rustc_hash::FxHashSet;

/// Known words of a single language, held in memory
#[derive(Debug, Clone)]
pub struct WordListChecker {
    language: String,
    words: FxHashSet<String>,
}

impl WordListChecker {
    /// Build a checker for `language` from any collection of words
    ///
    /// Words are trimmed and lowercased; blank entries are skipped.
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// The English dictionary compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{SpellChecker, WordListChecker};
    ///
    /// let checker = WordListChecker::embedded();
    /// assert!(checker.is_known_word("silk", "en"));
    /// assert!(!checker.is_known_word("klis", "en"));
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(DEFAULT_LANGUAGE, DICTIONARY_WORDS)
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Whether lookups in `language` can ever succeed
    #[must_use]
    pub fn supports(&self, language: &str) -> bool {
        same_language(&self.language, language)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for WordListChecker {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        self.supports(language) && self.words.contains(&word.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knows_listed_words() {
        let checker = WordListChecker::new("en", ["silent", "listen", "tinsel"]);
        assert_eq!(checker.len(), 3);
        assert!(checker.is_known_word("silent", "en"));
        assert!(checker.is_known_word("SILENT", "en"));
        assert!(!checker.is_known_word("lentis", "en"));
    }

    #[test]
    fn skips_blank_entries() {
        let checker = WordListChecker::new("en", ["  worm ", "", "   "]);
        assert_eq!(checker.len(), 1);
        assert!(checker.is_known_word("worm", "en"));
    }

    #[test]
    fn other_language_is_unknown() {
        let checker = WordListChecker::new("en", ["silk"]);
        assert!(checker.is_known_word("silk", "en_US"));
        assert!(!checker.is_known_word("silk", "tr"));
    }

    #[test]
    fn supports_its_own_language_only() {
        let checker = WordListChecker::embedded();
        assert!(checker.supports("en"));
        assert!(checker.supports("en_GB"));
        assert!(!checker.supports("tr"));
    }

    #[test]
    fn embedded_dictionary_is_english() {
        let checker = WordListChecker::embedded();
        assert_eq!(checker.language(), "en");
        assert!(!checker.is_empty());
        for word in ["silk", "worm", "silent", "listen", "wok"] {
            assert!(checker.is_known_word(word, "en"), "'{word}' missing");
        }
    }
}
