//! Word lists for Word Scramble
//!
//! Embedded root words and dictionary, file loading, and root word selection.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{DICTIONARY_WORDS, DICTIONARY_WORDS_COUNT, START_WORDS, START_WORDS_COUNT};
pub use loader::WordListError;
pub use source::{FALLBACK_ROOT, WordSource};
