//! Formatting utilities for terminal output

use crate::matcher::Outcome;

/// Letter tiles as a row of boxes, e.g. `[O] [R] [A]`
#[must_use]
pub fn tile_strip(letters: &[char]) -> String {
    letters
        .iter()
        .map(|letter| format!("[{letter}]"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// 1-based tile numbers aligned under [`tile_strip`]
#[must_use]
pub fn tile_numbers(count: usize) -> String {
    (1..=count)
        .map(|n| format!("{n:^3}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Letters the way they are read out, lowercase and comma separated
#[must_use]
pub fn spoken_letters(letters: &[char]) -> String {
    letters
        .iter()
        .flat_map(|letter| letter.to_lowercase())
        .map(String::from)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Marker shown next to a judged word
#[must_use]
pub const fn outcome_symbol(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Accepted => "✅",
        Outcome::AlreadyFound => "🔁",
        Outcome::TooShort | Outcome::NotAWord => "❌",
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining round time as a bar
#[must_use]
pub fn time_bar(remaining: u32, duration: u32, width: usize) -> String {
    create_progress_bar(f64::from(remaining), f64::from(duration), width)
}

/// Comma-separated word list, or a dash when empty
#[must_use]
pub fn word_list<S: AsRef<str>>(words: &[S]) -> String {
    if words.is_empty() {
        return "—".to_string();
    }
    words
        .iter()
        .map(|word| word.as_ref())
        .collect::<Vec<&str>>()
        .join(", ")
}
