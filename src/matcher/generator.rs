//! Possible-word generation
//!
//! Filters a dictionary down to the words that can be spelled from a pool.

use crate::core::{letter_frequencies, normalize};
use log::debug;
use rustc_hash::FxHashSet;

/// A set of uppercased words
pub type WordSet = FxHashSet<String>;

/// Shortest word a player may submit
pub const MIN_WORD_LENGTH: usize = 3;

/// Every dictionary word, uppercased, that is at least `min_length` letters
/// long and can be spelled from `pool`
///
/// The pool is counted once; each dictionary entry is then checked against
/// that count without modifying it. Calling this twice with the same inputs
/// yields the same set.
///
/// # Examples
/// ```
/// use wordronin::matcher::possible_words;
///
/// let pool: Vec<char> = "NGEROA".chars().collect();
/// let words = possible_words(&pool, 3, ["range", "ERROR", "ORANGE", "GO"]);
///
/// assert_eq!(words.len(), 2);
/// assert!(words.contains("RANGE"));
/// assert!(words.contains("ORANGE"));
/// ```
#[must_use]
pub fn possible_words<I, S>(pool: &[char], min_length: usize, dictionary: I) -> WordSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let counts = letter_frequencies(pool.iter().copied());

    let words: WordSet = dictionary
        .into_iter()
        .map(|word| normalize(word.as_ref()))
        .filter(|word| word.chars().count() >= min_length && counts.can_form(word))
        .collect();

    debug!("{} possible words from pool [{counts}]", words.len());
    words
}
