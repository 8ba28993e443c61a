//! State of a single round
//!
//! A round starts when a root word is chosen and lasts until the next reset.

use super::LetterPool;

/// Root word, accepted words and score of the current round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    root: String,
    pool: LetterPool,
    used: Vec<String>,
    score: u32,
}

impl Round {
    /// Start a fresh round with no accepted words and a zero score
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        let root = root.into();
        let pool = LetterPool::new(&root);
        Self {
            root,
            pool,
            used: Vec::new(),
            score: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Letters of the root word
    #[inline]
    #[must_use]
    pub const fn pool(&self) -> &LetterPool {
        &self.pool
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// True when `word` was accepted already or is the root word itself
    #[must_use]
    pub fn is_used(&self, word: &str) -> bool {
        word == self.root || self.used.iter().any(|w| w == word)
    }

    /// Record an accepted word and return the new score
    ///
    /// The caller has already validated `word`; the score grows by its length in characters.
    pub(crate) fn accept(&mut self, word: String) -> u32 {
        debug_assert!(!self.is_used(&word), "duplicate word {word}");
        self.score += word.chars().count() as u32;
        self.used.insert(0, word);
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_round_is_empty() {
        let round = Round::new("silkworm");
        assert_eq!(round.root(), "silkworm");
        assert!(round.used_words().is_empty());
        assert_eq!(round.score(), 0);
        assert_eq!(round.pool().len(), 8);
    }

    #[test]
    fn accept_inserts_front_and_scores() {
        let mut round = Round::new("silkworm");
        assert_eq!(round.accept("silk".to_string()), 4);
        assert_eq!(round.accept("worm".to_string()), 8);
        assert_eq!(round.used_words(), ["worm", "silk"]);
    }

    #[test]
    fn is_used_includes_root() {
        let mut round = Round::new("listen");
        assert!(round.is_used("listen"));
        assert!(!round.is_used("silent"));
        round.accept("silent".to_string());
        assert!(round.is_used("silent"));
    }
}
