//! Formatting utilities for terminal output

/// Circled number for a word length, like the badges next to used words
///
/// Lengths 1 to 20 map to `①`..`⑳`; anything else falls back to `(n)`.
#[must_use]
pub fn length_badge(length: usize) -> String {
    match length {
        1..=20 => char::from_u32(0x2460 + length as u32 - 1)
            .map_or_else(|| format!("({length})"), String::from),
        _ => format!("({length})"),
    }
}

/// Space the letters of a root word out for a title
#[must_use]
pub fn spaced_upper(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
