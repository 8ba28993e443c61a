//! Ordered validation pipeline
//!
//! Rules run in a fixed order and the first one that fails decides the rejection the
//! player sees, so the order here is part of the game's behavior.

use crate::core::{MIN_WORD_LENGTH, Rejection, Round};
use crate::dictionary::SpellChecker;

/// Everything a rule may look at
pub struct RuleContext<'a, D: SpellChecker> {
    pub round: &'a Round,
    pub checker: &'a D,
    pub language: &'a str,
}

/// A single validity check paired with the rejection it produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Not accepted before this round, and not the root word
    Originality,
    /// Spellable from the root word's letters
    Feasibility,
    /// Known to the spell checker
    Recognition,
    /// At least [`MIN_WORD_LENGTH`] characters
    Length,
}

/// Rules in evaluation order
pub const PIPELINE: [Rule; 4] = [
    Rule::Originality,
    Rule::Feasibility,
    Rule::Recognition,
    Rule::Length,
];

impl Rule {
    #[must_use]
    pub const fn rejection(self) -> Rejection {
        match self {
            Self::Originality => Rejection::AlreadyUsed,
            Self::Feasibility => Rejection::NotPossible,
            Self::Recognition => Rejection::NotReal,
            Self::Length => Rejection::TooShort,
        }
    }

    /// Whether `word` (already normalized) satisfies this rule
    #[must_use]
    pub fn passes<D: SpellChecker>(self, word: &str, ctx: &RuleContext<'_, D>) -> bool {
        match self {
            Self::Originality => !ctx.round.is_used(word),
            Self::Feasibility => ctx.round.pool().can_spell(word),
            Self::Recognition => ctx.checker.is_known_word(word, ctx.language),
            Self::Length => word.chars().count() >= MIN_WORD_LENGTH,
        }
    }
}

/// Run the pipeline and return the rejection of the first failing rule
///
/// Later rules are not evaluated once one fails.
#[must_use]
pub fn first_failure<D: SpellChecker>(word: &str, ctx: &RuleContext<'_, D>) -> Option<Rejection> {
    PIPELINE
        .iter()
        .find(|rule| !rule.passes(word, ctx))
        .map(|rule| rule.rejection())
}
