//! Dictionary of sliceable words

use super::DICTIONARY;
use crate::core::normalize;
use crate::matcher::{WordSet, possible_words};

/// Fixed set of uppercase words, built once and never mutated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from any words; they are uppercased, sorted and
    /// de-duplicated
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|word| normalize(word.as_ref().trim()))
            .filter(|word| !word.is_empty())
            .collect();
        words.sort_unstable();
        words.dedup();

        Self { words }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DICTIONARY)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.binary_search(&normalize(word)).is_ok()
    }

    /// Words in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words of at least `min_length` letters that can be spelled from `pool`
    #[must_use]
    pub fn possible_words(&self, pool: &[char], min_length: usize) -> WordSet {
        possible_words(pool, min_length, &self.words)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::embedded()
    }
}
