//! Letter multisets
//!
//! A letter pool is counted into a case-normalized frequency map. Words are
//! checked against that map by drawing letters from a private copy, so one
//! check never affects the next.

use rustc_hash::FxHashMap;
use std::fmt;

/// Uppercased letter → occurrence count
///
/// Keys are always uppercase. The map is only ever read by formability
/// checks; each check works on its own copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts(FxHashMap<char, usize>);

impl LetterCounts {
    /// Remaining count for a letter (case-insensitive)
    #[must_use]
    pub fn get(&self, letter: char) -> usize {
        letter
            .to_uppercase()
            .next()
            .and_then(|upper| self.0.get(&upper).copied())
            .unwrap_or(0)
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of letters, counting repeats
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Iterate over `(letter, count)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.0.iter().map(|(&letter, &count)| (letter, count))
    }

    /// Check whether `word` can be spelled from these letters
    ///
    /// See [`can_form`].
    #[must_use]
    pub fn can_form(&self, word: &str) -> bool {
        can_form(word, self)
    }
}

impl FromIterator<char> for LetterCounts {
    fn from_iter<I: IntoIterator<Item = char>>(letters: I) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for letter in letters.into_iter().flat_map(char::to_uppercase) {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self(counts)
    }
}

impl fmt::Display for LetterCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<(char, usize)> = self.iter().collect();
        entries.sort_unstable();

        for (i, (letter, count)) in entries.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{letter}:{count}")?;
        }
        Ok(())
    }
}

/// Count the letters of a pool, uppercasing each one
///
/// # Examples
/// ```
/// use wordronin::core::letter_frequencies;
///
/// let counts = letter_frequencies("Orange".chars());
/// assert_eq!(counts.get('O'), 1);
/// assert_eq!(counts.get('g'), 1);
/// assert_eq!(counts.len(), 6);
/// ```
#[must_use]
pub fn letter_frequencies<I: IntoIterator<Item = char>>(letters: I) -> LetterCounts {
    letters.into_iter().collect()
}

/// Check whether `word` can be spelled using only the letters in `counts`
///
/// Each letter of the word (uppercased) is drawn from a copy of the counts;
/// the check fails as soon as a letter is missing or used up. The caller's
/// counts are never modified.
///
/// # Examples
/// ```
/// use wordronin::core::{can_form, letter_frequencies};
///
/// let counts = letter_frequencies("ORANGE".chars());
/// assert!(can_form("RANGE", &counts));
/// assert!(!can_form("ERROR", &counts)); // needs three Rs
/// ```
#[must_use]
pub fn can_form(word: &str, counts: &LetterCounts) -> bool {
    let mut remaining = counts.0.clone();

    for letter in word.chars().flat_map(char::to_uppercase) {
        match remaining.get_mut(&letter) {
            Some(left) if *left > 0 => *left -= 1,
            _ => return false,
        }
    }

    true
}

/// Uppercase a word the same way pools are counted
#[must_use]
pub fn normalize(word: &str) -> String {
    word.chars().flat_map(char::to_uppercase).collect()
}
