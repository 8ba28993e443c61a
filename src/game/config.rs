//! Game configuration

use crate::dictionary::DEFAULT_LANGUAGE;

/// Settings fixed for the lifetime of a [`GameEngine`](super::GameEngine)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Language passed to the spell checker
    pub language: String,
    /// Seed for root word selection; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub fn new(language: impl Into<String>, seed: Option<u64>) -> Self {
        Self {
            language: language.into(),
            seed,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_english_unseeded() {
        let config = GameConfig::default();
        assert_eq!(config.language, "en");
        assert_eq!(config.seed, None);
    }
}
