//! Core domain types for Word Scramble
//!
//! Pure types with no I/O: letter multisets, round state and rejection reasons.

mod letters;
mod rejection;
mod round;

pub use letters::LetterPool;
pub use rejection::{Rejection, RejectionReason};
pub use round::Round;

/// Shortest word the game accepts
pub const MIN_WORD_LENGTH: usize = 4;

/// Lowercase a raw submission and strip surrounding whitespace and newlines
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk\n"), "silk");
/// assert_eq!(normalize(" \t "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
