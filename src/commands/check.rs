//! One-shot word check
//!
//! Validates a single word against a given root without playing a round.

use crate::core::{RejectionReason, normalize};
use crate::dictionary::SpellChecker;
use crate::game::{GameConfig, GameEngine};
use crate::wordlists::WordSource;

/// Result of checking a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub word: String,
    pub root: String,
    /// `None` when the word would be accepted
    pub rejection: Option<RejectionReason>,
}

impl CheckResult {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Check `word` against `root` as the first submission of a round
///
/// # Errors
///
/// Returns an error if the root or the word is blank.
pub fn check_word<D: SpellChecker>(
    root: &str,
    word: &str,
    checker: D,
    language: &str,
) -> Result<CheckResult, String> {
    let root = normalize(root);
    if root.is_empty() {
        return Err("Root word must not be empty".to_string());
    }
    let word = normalize(word);
    if word.is_empty() {
        return Err("Nothing to check".to_string());
    }

    let source = WordSource::from_words(vec![root.clone()]);
    let engine = GameEngine::new(&source, checker, GameConfig::new(language, Some(0)));
    let rejection = engine.evaluate(&word).map(|r| r.reason(&root));

    Ok(CheckResult {
        word,
        root,
        rejection,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rejection;
    use crate::dictionary::WordListChecker;

    fn checker() -> WordListChecker {
        WordListChecker::new("en", ["silent", "silk", "wok"])
    }

    #[test]
    fn accepted_anagram() {
        let result = check_word("listen", "SILENT", checker(), "en").unwrap();
        assert!(result.is_accepted());
        assert_eq!(result.word, "silent");
        assert_eq!(result.root, "listen");
    }

    #[test]
    fn rejected_with_reason() {
        let result = check_word("silkworm", "wok", checker(), "en").unwrap();
        let reason = result.rejection.unwrap();
        assert_eq!(reason.kind, Rejection::TooShort);
    }

    #[test]
    fn root_itself_is_already_used() {
        let result = check_word("listen", "listen", checker(), "en").unwrap();
        assert_eq!(result.rejection.unwrap().kind, Rejection::AlreadyUsed);
    }

    #[test]
    fn blank_inputs_are_errors() {
        assert!(check_word("", "silk", checker(), "en").is_err());
        assert!(check_word("silkworm", "  ", checker(), "en").is_err());
    }
}
