//! End-to-end rounds against a deterministic dictionary

use std::cell::RefCell;
use word_scramble::core::Rejection;
use word_scramble::dictionary::SpellChecker;
use word_scramble::game::{GameConfig, GameEngine};
use word_scramble::wordlists::{FALLBACK_ROOT, WordSource};

/// Knows a fixed set of words and records every lookup
struct FakeDictionary {
    known: &'static [&'static str],
    lookups: RefCell<Vec<(String, String)>>,
}

impl FakeDictionary {
    fn new(known: &'static [&'static str]) -> Self {
        Self {
            known,
            lookups: RefCell::new(Vec::new()),
        }
    }
}

impl SpellChecker for FakeDictionary {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        self.lookups
            .borrow_mut()
            .push((word.to_string(), language.to_string()));
        self.known.contains(&word)
    }
}

const KNOWN: &[&str] = &["silent", "tinsel", "enlist", "inlet", "lens", "wok", "silk", "worm"];

fn word_source(words: &[&str]) -> WordSource {
    WordSource::from_words(words.iter().map(|w| (*w).to_string()).collect())
}

#[test]
fn listen_silent_scenario() {
    let source = word_source(&["listen"]);
    let mut engine = GameEngine::new(&source, FakeDictionary::new(KNOWN), GameConfig::default());

    let accepted = engine.submit("silent").unwrap().unwrap();
    assert_eq!(accepted.word, "silent");
    assert_eq!(accepted.score, 6);
    assert_eq!(engine.used_words(), ["silent"]);

    let reason = engine.submit("silent").unwrap_err();
    assert_eq!(reason.kind, Rejection::AlreadyUsed);
    assert_eq!(engine.score(), 6);
}

#[test]
fn accepted_word_is_first_and_adds_its_length() {
    let source = word_source(&["listen"]);
    let mut engine = GameEngine::new(&source, FakeDictionary::new(KNOWN), GameConfig::default());

    for word in ["tinsel", "inlet", "lens", "enlist"] {
        let before = engine.score();
        engine.submit(word).unwrap().unwrap();
        assert_eq!(engine.used_words()[0], word);
        assert_eq!(engine.score(), before + word.len() as u32);
    }
    assert_eq!(engine.used_words(), ["enlist", "lens", "inlet", "tinsel"]);
}

#[test]
fn silkworm_rules() {
    let source = word_source(&["silkworm"]);
    let mut engine = GameEngine::new(&source, FakeDictionary::new(KNOWN), GameConfig::default());

    assert_eq!(engine.submit("silkk").unwrap_err().kind, Rejection::NotPossible);
    assert_eq!(engine.submit("silkworm").unwrap_err().kind, Rejection::AlreadyUsed);
    assert_eq!(engine.submit("wok").unwrap_err().kind, Rejection::TooShort);
    assert_eq!(engine.submit("milk").unwrap_err().kind, Rejection::NotReal);
    assert!(engine.submit("silk").unwrap().is_some());
}

#[test]
fn root_word_never_reaches_the_dictionary() {
    let source = word_source(&["silkworm"]);
    let mut engine = GameEngine::new(&source, FakeDictionary::new(&[]), GameConfig::default());

    assert_eq!(engine.submit("SILKWORM").unwrap_err().kind, Rejection::AlreadyUsed);
    assert_eq!(engine.submit("zzzz").unwrap_err().kind, Rejection::NotPossible);
}

#[test]
fn dictionary_receives_normalized_word_and_language() {
    let source = word_source(&["listen"]);
    let dictionary = FakeDictionary::new(KNOWN);
    let mut engine = GameEngine::new(&source, &dictionary, GameConfig::new("en_GB", None));

    engine.submit("  SILENT\n").unwrap();
    assert_eq!(
        dictionary.lookups.borrow().as_slice(),
        [("silent".to_string(), "en_GB".to_string())]
    );
}

#[test]
fn repeated_rejection_changes_nothing() {
    let source = word_source(&["listen"]);
    let mut engine = GameEngine::new(&source, FakeDictionary::new(KNOWN), GameConfig::default());
    engine.submit("silent").unwrap();

    let first = engine.submit("nets").unwrap_err();
    let used = engine.used_words().to_vec();
    let second = engine.submit("nets").unwrap_err();

    assert_eq!(first, second);
    assert_eq!(engine.used_words(), used.as_slice());
    assert_eq!(engine.score(), 6);
    assert_eq!(engine.last_rejection(), Some(&second));
}

#[test]
fn blank_submissions_produce_nothing() {
    let source = word_source(&["listen"]);
    let mut engine = GameEngine::new(&source, FakeDictionary::new(KNOWN), GameConfig::default());

    assert_eq!(engine.submit("\n\t  "), Ok(None));
    assert!(engine.last_rejection().is_none());
    assert!(engine.used_words().is_empty());
}

#[test]
fn start_round_draws_from_list() {
    let words = ["listen", "silkworm", "mountain"];
    let source = word_source(&words);
    let mut engine = GameEngine::new(
        &source,
        FakeDictionary::new(KNOWN),
        GameConfig::new("en", Some(2024)),
    );

    for _ in 0..10 {
        let _ = engine.submit("lens");
        engine.start_round();
        assert!(words.contains(&engine.root_word()));
        assert!(engine.used_words().is_empty());
        assert_eq!(engine.score(), 0);
        assert!(engine.last_rejection().is_none());
    }
}

#[test]
fn empty_list_uses_fallback_root() {
    let source = word_source(&[]);
    let mut engine = GameEngine::new(&source, FakeDictionary::new(KNOWN), GameConfig::default());
    engine.start_round();

    assert_eq!(engine.root_word(), FALLBACK_ROOT);
    assert_eq!(engine.score(), 0);
    assert!(engine.used_words().is_empty());
}
