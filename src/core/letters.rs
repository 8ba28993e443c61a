//! Letter multiset of a root word
//!
//! A candidate is spellable from the root when every one of its letters can consume
//! a distinct, still unused occurrence of that letter in the root.

use rustc_hash::FxHashMap;
use std::fmt;

/// Multiset of the letters available in a root word
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Build the pool from a root word
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("silkworm");
    /// assert!(pool.can_spell("silk"));
    /// assert!(!pool.can_spell("silkk"));
    /// ```
    #[must_use]
    pub fn new(root: &str) -> Self {
        let mut counts = FxHashMap::default();
        for ch in root.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of occurrences of `letter` still available
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters in the pool
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether `candidate` is a sub-multiset of the pool
    #[must_use]
    pub fn can_spell(&self, candidate: &str) -> bool {
        self.remaining_after(candidate).is_some()
    }

    /// Consume the letters of `candidate`, returning what is left
    ///
    /// Returns `None` as soon as a letter has no unused occurrence.
    #[must_use]
    pub fn remaining_after(&self, candidate: &str) -> Option<Self> {
        let mut working = self.clone();
        for ch in candidate.chars() {
            let slot = working.counts.get_mut(&ch)?;
            if *slot == 0 {
                return None;
            }
            *slot -= 1;
        }
        working.counts.retain(|_, count| *count > 0);
        Some(working)
    }
}

impl fmt::Display for LetterPool {
    /// Letters in alphabetical order, repeated by multiplicity
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters: Vec<(char, usize)> =
            self.counts.iter().map(|(&ch, &count)| (ch, count)).collect();
        letters.sort_unstable();
        for (ch, count) in letters {
            for _ in 0..count {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
