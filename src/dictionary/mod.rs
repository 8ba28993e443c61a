//! Spell checking
//!
//! The game only needs to ask whether a word is known in a language, so the checker is
//! a trait the engine is generic over.

mod word_list;

pub use word_list::WordListChecker;

/// Language used when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// A source of truth for "is this a real word"
pub trait SpellChecker {
    /// Whether `word` is a known word in `language`
    fn is_known_word(&self, word: &str, language: &str) -> bool;
}

impl<T: SpellChecker + ?Sized> SpellChecker for &T {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        (**self).is_known_word(word, language)
    }
}

impl<T: SpellChecker + ?Sized> SpellChecker for Box<T> {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        (**self).is_known_word(word, language)
    }
}

/// Compare two language tags by their primary subtag, ignoring case
///
/// `"en"`, `"en_US"` and `"EN-gb"` all name the same language.
#[must_use]
pub fn same_language(a: &str, b: &str) -> bool {
    fn primary(tag: &str) -> &str {
        tag.split(['-', '_']).next().unwrap_or(tag)
    }
    primary(a).eq_ignore_ascii_case(primary(b))
}
