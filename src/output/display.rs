//! Display functions for game events
//!
//! Each function writes to any `Write` so line mode can be driven from tests.

use super::formatters::{create_progress_bar, length_badge, spaced_upper};
use crate::commands::CheckResult;
use crate::core::RejectionReason;
use crate::game::AcceptedWord;
use colored::Colorize;
use std::io::{self, Write};

/// Print the banner for a new round
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn print_round_header(out: &mut impl Write, root: &str) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(out, "Root word: {}", spaced_upper(root).bright_yellow().bold())?;
    writeln!(out, "{}", "─".repeat(60).cyan())
}

/// Print an accepted word with its badge and the new score
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn print_accepted(out: &mut impl Write, accepted: &AcceptedWord) -> io::Result<()> {
    writeln!(
        out,
        "{} {} {}  Score: {}",
        "✓".green().bold(),
        length_badge(accepted.word.chars().count()),
        accepted.word.bright_white().bold(),
        accepted.score.to_string().bright_cyan().bold()
    )
}

/// Print a rejection as an alert: title on one line, message below
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn print_rejection(out: &mut impl Write, reason: &RejectionReason) -> io::Result<()> {
    writeln!(out, "{} {}", "✗".red().bold(), reason.title.red().bold())?;
    writeln!(out, "  {}", reason.message)
}

/// Print the words accepted so far, most recent first
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn print_used_words(
    out: &mut impl Write,
    root_len: usize,
    words: &[String],
    score: u32,
) -> io::Result<()> {
    if words.is_empty() {
        writeln!(out, "No words yet.")?;
    }
    for word in words {
        let len = word.chars().count();
        writeln!(
            out,
            "  {} {:<12} {}",
            length_badge(len),
            word,
            create_progress_bar(len, root_len, root_len).bright_black()
        )?;
    }
    writeln!(out, "Score: {}", score.to_string().bright_cyan().bold())
}

/// Print the verdict of a one-shot check
pub fn print_check_result(result: &CheckResult) {
    println!(
        "Checking {} against {}",
        result.word.bright_white().bold(),
        spaced_upper(&result.root).bright_yellow().bold()
    );
    match &result.rejection {
        None => println!(
            "{} {} would score {} points",
            "✓".green().bold(),
            length_badge(result.word.chars().count()),
            result.word.chars().count().to_string().bright_cyan()
        ),
        Some(reason) => {
            println!("{} {}", "✗".red().bold(), reason.title.red().bold());
            println!("  {}", reason.message);
        }
    }
}
