//! Main game engine
//!
//! Owns the state of the current round and validates every submission against it.

use super::config::GameConfig;
use super::rules::{RuleContext, first_failure};
use crate::core::{Rejection, RejectionReason, Round, normalize};
use crate::dictionary::SpellChecker;
use crate::wordlists::WordSource;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A word that passed every rule and was added to the round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedWord {
    pub word: String,
    /// Points this word earned (its length)
    pub points: u32,
    /// Round score after adding the word
    pub score: u32,
}

/// Word Scramble engine
///
/// Always in a round: construction starts the first one, and [`start_round`](Self::start_round)
/// replaces it with a fresh one. There is no terminal state.
pub struct GameEngine<'a, D: SpellChecker> {
    source: &'a WordSource,
    checker: D,
    config: GameConfig,
    rng: StdRng,
    round: Round,
    last_rejection: Option<RejectionReason>,
}

impl<'a, D: SpellChecker> GameEngine<'a, D> {
    /// Create an engine and start its first round
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::WordListChecker;
    /// use word_scramble::game::{GameConfig, GameEngine};
    /// use word_scramble::wordlists::WordSource;
    ///
    /// let source = WordSource::from_words(vec!["listen".to_string()]);
    /// let checker = WordListChecker::new("en", ["silent"]);
    /// let mut engine = GameEngine::new(&source, checker, GameConfig::default());
    ///
    /// let accepted = engine.submit("Silent").unwrap().unwrap();
    /// assert_eq!(accepted.score, 6);
    /// assert_eq!(engine.used_words(), ["silent"]);
    /// ```
    pub fn new(source: &'a WordSource, checker: D, config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let mut engine = Self {
            source,
            checker,
            config,
            rng,
            round: Round::new(String::new()),
            last_rejection: None,
        };
        engine.start_round();
        engine
    }

    /// Start a new round with a freshly picked root word
    ///
    /// Clears accepted words, score and the last rejection unconditionally.
    pub fn start_round(&mut self) {
        let root = self.source.pick_root(&mut self.rng).to_string();
        self.start_round_with(&root);
    }

    /// Start a new round with a chosen root word
    pub fn start_round_with(&mut self, root: &str) {
        self.round = Round::new(normalize(root));
        self.last_rejection = None;
        tracing::info!(root = self.round.root(), "round started");
    }

    /// Submit a word for the current round
    ///
    /// Input is lowercased and trimmed first. Blank input is ignored and returns
    /// `Ok(None)` without touching any state. A rejected word leaves the round
    /// unchanged and replaces the stored [`last_rejection`](Self::last_rejection).
    ///
    /// # Errors
    ///
    /// Returns the [`RejectionReason`] of the first rule the word fails.
    pub fn submit(&mut self, raw: &str) -> Result<Option<AcceptedWord>, RejectionReason> {
        let word = normalize(raw);
        if word.is_empty() {
            return Ok(None);
        }

        if let Some(rejection) = self.evaluate(&word) {
            let reason = rejection.reason(self.round.root());
            tracing::debug!(%word, ?rejection, "word rejected");
            self.last_rejection = Some(reason.clone());
            return Err(reason);
        }

        self.last_rejection = None;
        let points = word.chars().count() as u32;
        let score = self.round.accept(word.clone());
        tracing::debug!(%word, points, score, "word accepted");

        Ok(Some(AcceptedWord {
            word,
            points,
            score,
        }))
    }

    /// Run the rules against an already normalized word without changing any state
    #[must_use]
    pub fn evaluate(&self, word: &str) -> Option<Rejection> {
        let ctx = RuleContext {
            round: &self.round,
            checker: &self.checker,
            language: &self.config.language,
        };
        first_failure(word, &ctx)
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        self.round.root()
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        self.round.used_words()
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.round.score()
    }

    /// Reason the most recent submission was rejected, if it was
    #[must_use]
    pub const fn last_rejection(&self) -> Option<&RejectionReason> {
        self.last_rejection.as_ref()
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.config.language
    }

    #[must_use]
    pub const fn source(&self) -> &'a WordSource {
        self.source
    }
}
