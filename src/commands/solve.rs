//! Letter solving command
//!
//! Lists every dictionary word a set of letters can spell.

use crate::core::points_for_word;
use crate::wordlists::Dictionary;

/// Configuration for solving a letter pool
pub struct SolveConfig {
    pub letters: String,
    pub min_length: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(letters: String, min_length: usize) -> Self {
        Self {
            letters,
            min_length,
        }
    }
}

/// A formable word and what it is worth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: String,
    pub points: u32,
}

/// Result of solving a letter pool
pub struct SolveResult {
    pub letters: Vec<char>,
    /// Longest first, then alphabetical
    pub words: Vec<ScoredWord>,
    pub max_score: u32,
}

/// Find every word in `dictionary` that can be spelled from the letters
///
/// # Errors
///
/// Returns an error if the letters are empty or contain anything other than
/// letters (whitespace is ignored).
pub fn solve_letters(config: &SolveConfig, dictionary: &Dictionary) -> Result<SolveResult, String> {
    let letters: Vec<char> = config
        .letters
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() {
        return Err("No letters given".to_string());
    }
    if let Some(bad) = letters.iter().find(|c| !c.is_alphabetic()) {
        return Err(format!("Invalid letter '{bad}'"));
    }

    let mut words: Vec<ScoredWord> = dictionary
        .possible_words(&letters, config.min_length)
        .into_iter()
        .map(|word| {
            let points = points_for_word(word.chars().count());
            ScoredWord { word, points }
        })
        .collect();

    words.sort_by(|a, b| {
        b.word
            .chars()
            .count()
            .cmp(&a.word.chars().count())
            .then_with(|| a.word.cmp(&b.word))
    });

    let max_score = words.iter().map(|w| w.points).sum();

    Ok(SolveResult {
        letters,
        words,
        max_score,
    })
}
