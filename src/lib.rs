//! Word Scramble
//!
//! A word game: make as many words as you can from the letters of a random root word.
//! Words must be new, spellable from the root's letters, real, and at least four letters
//! long. Each accepted word scores its length.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::dictionary::WordListChecker;
//! use word_scramble::game::{GameConfig, GameEngine};
//! use word_scramble::wordlists::WordSource;
//!
//! let source = WordSource::embedded();
//! let mut engine = GameEngine::new(&source, WordListChecker::embedded(), GameConfig::default());
//!
//! engine.start_round_with("silkworm");
//! let accepted = engine.submit("silk").unwrap().unwrap();
//! assert_eq!(accepted.score, 4);
//!
//! let rejected = engine.submit("silk").unwrap_err();
//! println!("{}: {}", rejected.title, rejected.message);
//! ```

// Core domain types
pub mod core;

// Spell checking
pub mod dictionary;

// Word lists and root word selection
pub mod wordlists;

// Round state and validation
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
