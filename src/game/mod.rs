//! Game engine for Word Scramble
//!
//! Round state, the validation pipeline and engine configuration.

mod config;
mod engine;
pub mod rules;

pub use config::GameConfig;
pub use engine::{AcceptedWord, GameEngine};
pub use rules::{PIPELINE, Rule};
