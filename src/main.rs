//! Word Scramble - CLI
//!
//! Make words from the letters of a random root word, in a TUI or on plain lines.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use word_scramble::{
    commands::{check_word, run_simple},
    dictionary::{DEFAULT_LANGUAGE, WordListChecker},
    game::{GameConfig, GameEngine},
    logging::{self, LogTarget},
    output::print_check_result,
    wordlists::{WordSource, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list: one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Dictionary of known words: one word per line (default: embedded English)
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Language of the dictionary
    #[arg(short, long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Seed for picking root words
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (the TUI logs nowhere else)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line by line, without TUI)
    Simple,

    /// Check a single word against a root word
    Check {
        /// The word to check
        word: String,

        /// Root word to spell it from
        #[arg(short, long)]
        root: String,
    },
}

/// Load the root word list based on the -w flag
fn load_source(path: Option<&Path>) -> Result<WordSource> {
    match path {
        Some(path) => WordSource::from_file(path).context("Could not load root word list"),
        None => Ok(WordSource::embedded()),
    }
}

/// Load the spell checker based on the -d flag
fn load_checker(path: Option<&Path>, language: &str) -> Result<WordListChecker> {
    match path {
        Some(path) => {
            let words = load_from_file(path).context("Could not load dictionary")?;
            Ok(WordListChecker::new(language, words))
        }
        None => {
            let checker = WordListChecker::embedded();
            if !checker.supports(language) {
                bail!(
                    "The built-in dictionary is '{}' only; pass --dictionary for language '{language}'",
                    checker.language()
                );
            }
            Ok(checker)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let log_target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path),
        (None, Commands::Play) => LogTarget::Disabled,
        (None, _) => LogTarget::Stderr,
    };
    logging::init(log_target)?;

    let checker = load_checker(cli.dictionary.as_deref(), &cli.language)?;
    let config = GameConfig::new(cli.language.clone(), cli.seed);

    match command {
        Commands::Check { word, root } => {
            let result =
                check_word(&root, &word, checker, &config.language).map_err(anyhow::Error::msg)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Simple => {
            let source = load_source(cli.words.as_deref())?;
            let mut engine = GameEngine::new(&source, checker, config);
            run_simple(&mut engine).map_err(anyhow::Error::msg)
        }
        Commands::Play => {
            use word_scramble::interactive::{App, run_tui};

            let source = load_source(cli.words.as_deref())?;
            let engine = GameEngine::new(&source, checker, config);
            run_tui(App::new(engine))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dictionary_for_its_language() {
        let checker = load_checker(None, "en_US").unwrap();
        assert_eq!(checker.language(), "en");
    }

    #[test]
    fn embedded_dictionary_rejects_other_language() {
        let err = load_checker(None, "tr").unwrap_err();
        assert!(err.to_string().contains("--dictionary"));
    }

    #[test]
    fn custom_dictionary_takes_requested_language() {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_dict_{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "çalış\nkalem\n").unwrap();

        let checker = load_checker(Some(path.as_path()), "tr").unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(checker.language(), "tr");
        assert_eq!(checker.len(), 2);
    }
}
