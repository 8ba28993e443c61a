//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI

use crate::core::MIN_WORD_LENGTH;
use crate::dictionary::SpellChecker;
use crate::game::GameEngine;
use crate::output::{print_accepted, print_rejection, print_round_header, print_used_words};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin and stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<D: SpellChecker>(engine: &mut GameEngine<'_, D>) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(engine, &mut stdin.lock(), &mut stdout.lock()).map_err(|e| e.to_string())
}

/// Drive the game from any line source
///
/// Lines starting with `:` are commands; everything else is a submission. Returns
/// when the input ends or the player quits.
///
/// # Errors
///
/// Returns an I/O error if reading or writing fails.
pub fn play_lines<D: SpellChecker>(
    engine: &mut GameEngine<'_, D>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                Word Scramble - Interactive Mode              ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Make as many words as you can from the root word's letters.")?;
    writeln!(
        out,
        "Words need at least {MIN_WORD_LENGTH} letters; longer words score more.\n"
    )?;
    writeln!(out, "Commands: ':words' to list your words, ':reset' for a new word, ':quit' to exit")?;

    print_round_header(out, engine.root_word())?;

    let mut line = String::new();
    loop {
        write!(out, "Enter your word: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match line.trim() {
            ":quit" | ":q" | ":exit" => break,
            ":reset" | ":r" | ":new" => {
                engine.start_round();
                writeln!(out, "\n🔄 New round started!")?;
                print_round_header(out, engine.root_word())?;
            }
            ":words" | ":w" => {
                let root_len = engine.root_word().chars().count();
                print_used_words(out, root_len, engine.used_words(), engine.score())?;
            }
            _ => match engine.submit(&line) {
                Ok(Some(accepted)) => print_accepted(out, &accepted)?,
                Ok(None) => {}
                Err(reason) => print_rejection(out, &reason)?,
            },
        }
    }

    writeln!(
        out,
        "\n👋 Thanks for playing! Final score: {}\n",
        engine.score().to_string().bright_cyan().bold()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListChecker;
    use crate::game::GameConfig;
    use crate::wordlists::WordSource;
    use std::io::Cursor;

    fn play(script: &str) -> (String, u32, Vec<String>) {
        colored::control::set_override(false);

        let source = WordSource::from_words(vec!["listen".to_string()]);
        let checker = WordListChecker::new("en", ["silent", "tinsel", "lens", "net"]);
        let mut engine = GameEngine::new(&source, checker, GameConfig::new("en", Some(5)));

        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        play_lines(&mut engine, &mut input, &mut out).unwrap();

        (
            String::from_utf8(out).unwrap(),
            engine.score(),
            engine.used_words().to_vec(),
        )
    }

    #[test]
    fn accepts_and_rejects_words() {
        let (out, score, used) = play("silent\nsilent\nnet\n\n:quit\n");

        assert_eq!(score, 6);
        assert_eq!(used, ["silent"]);
        assert!(out.contains("Word used already"));
        assert!(out.contains("Too Short!"));
        assert!(out.contains("Final score: 6"));
    }

    #[test]
    fn ends_at_end_of_input() {
        let (out, score, used) = play("tinsel\nlens");
        assert_eq!(score, 10);
        assert_eq!(used, ["lens", "tinsel"]);
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn reset_clears_round() {
        let (out, score, used) = play("silent\n:reset\n");
        assert_eq!(score, 0);
        assert!(used.is_empty());
        assert!(out.contains("New round started"));
    }

    #[test]
    fn words_command_lists_used_words() {
        let (out, _, _) = play("silent\n:words\n:q\n");
        assert!(out.contains("silent"));
        assert!(out.contains("Score: 6"));
    }

    #[test]
    fn impossible_word_names_root() {
        let (out, _, _) = play("silents\n");
        assert!(out.contains("You can't spell that word from 'listen'!"));
    }
}
