//! Reasons a submitted word is turned down
//!
//! These are expected outcomes of play, reported back to the player, never failures.

use std::fmt;

/// Why a submission was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Already accepted this round, or the root word itself
    AlreadyUsed,
    /// Needs letters the root word does not have (enough of)
    NotPossible,
    /// Unknown to the spell checker
    NotReal,
    /// Shorter than [`MIN_WORD_LENGTH`](super::MIN_WORD_LENGTH)
    TooShort,
}

impl Rejection {
    /// Alert title shown to the player
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word used already",
            Self::NotPossible => "Word not possible",
            Self::NotReal => "Word not recognized",
            Self::TooShort => "Too Short!",
        }
    }

    /// Alert message, which may mention the round's root word
    #[must_use]
    pub fn message(self, root: &str) -> String {
        match self {
            Self::AlreadyUsed => "Be more original!".to_string(),
            Self::NotPossible => format!("You can't spell that word from '{root}'!"),
            Self::NotReal => "You can't just make them up, you know!".to_string(),
            Self::TooShort => format!(
                "Your answer must be longer than {} letters",
                super::MIN_WORD_LENGTH - 1
            ),
        }
    }

    /// Title and message pair for presentation
    #[must_use]
    pub fn reason(self, root: &str) -> RejectionReason {
        RejectionReason {
            kind: self,
            title: self.title().to_string(),
            message: self.message(root),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// The last rejection of a round, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectionReason {
    pub kind: Rejection,
    pub title: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles() {
        assert_eq!(Rejection::AlreadyUsed.title(), "Word used already");
        assert_eq!(Rejection::NotPossible.title(), "Word not possible");
        assert_eq!(Rejection::NotReal.title(), "Word not recognized");
        assert_eq!(Rejection::TooShort.title(), "Too Short!");
    }

    #[test]
    fn not_possible_mentions_root() {
        assert_eq!(
            Rejection::NotPossible.message("silkworm"),
            "You can't spell that word from 'silkworm'!"
        );
    }

    #[test]
    fn too_short_states_limit() {
        assert_eq!(
            Rejection::TooShort.message("silkworm"),
            "Your answer must be longer than 3 letters"
        );
    }

    #[test]
    fn reason_carries_kind() {
        let reason = Rejection::AlreadyUsed.reason("listen");
        assert_eq!(reason.kind, Rejection::AlreadyUsed);
        assert_eq!(reason.title, "Word used already");
        assert_eq!(reason.message, "Be more original!");
    }

    #[test]
    fn display_uses_title() {
        assert_eq!(format!("{}", Rejection::NotReal), "Word not recognized");
    }
}
