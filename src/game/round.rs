//! A single Slice Mode round
//!
//! The round owns its letter pool, the words that pool can spell, and the
//! words found so far. Possible words are computed once, when the round is
//! built, and never change afterwards.

use crate::core::{normalize, points_for_word};
use crate::matcher::{Validation, WordSet, validate_with_min_length};
use crate::wordlists::Dictionary;
use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone)]
pub struct Round {
    base_word: String,
    letters: Vec<char>,
    possible: WordSet,
    found: WordSet,
    found_order: Vec<String>,
    score: u32,
    min_length: usize,
}

impl Round {
    /// Build a round from an already-arranged letter pool
    #[must_use]
    pub fn new(
        base_word: &str,
        letters: Vec<char>,
        dictionary: &Dictionary,
        min_length: usize,
    ) -> Self {
        let letters: Vec<char> = letters.into_iter().flat_map(char::to_uppercase).collect();
        let possible = dictionary.possible_words(&letters, min_length);

        Self {
            base_word: normalize(base_word),
            letters,
            possible,
            found: WordSet::default(),
            found_order: Vec::new(),
            score: 0,
            min_length,
        }
    }

    /// Build a round whose pool is `base_word`'s letters in random order
    pub fn shuffled<R: Rng + ?Sized>(
        base_word: &str,
        dictionary: &Dictionary,
        min_length: usize,
        rng: &mut R,
    ) -> Self {
        let mut letters: Vec<char> = normalize(base_word).chars().collect();
        letters.shuffle(rng);
        Self::new(base_word, letters, dictionary, min_length)
    }

    #[inline]
    #[must_use]
    pub fn base_word(&self) -> &str {
        &self.base_word
    }

    /// The letter tiles, in display order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub const fn possible(&self) -> &WordSet {
        &self.possible
    }

    #[inline]
    #[must_use]
    pub const fn found(&self) -> &WordSet {
        &self.found
    }

    /// Found words in the order they were submitted
    #[inline]
    #[must_use]
    pub fn found_in_order(&self) -> &[String] {
        &self.found_order
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    /// Score for finding every possible word
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.possible
            .iter()
            .map(|word| points_for_word(word.chars().count()))
            .sum()
    }

    /// Spell a word from tile indices
    ///
    /// Indices past the last tile are skipped, as is any tile already used
    /// earlier in the selection.
    #[must_use]
    pub fn word_from_indices(&self, indices: &[usize]) -> String {
        let mut used = vec![false; self.letters.len()];
        let mut word = String::with_capacity(indices.len());

        for &index in indices {
            if let Some(&letter) = self.letters.get(index)
                && !used[index]
            {
                used[index] = true;
                word.push(letter);
            }
        }

        word
    }

    /// Judge a submitted word and record it if accepted
    pub fn submit(&mut self, candidate: &str) -> Validation {
        let validation =
            validate_with_min_length(candidate, &self.possible, &mut self.found, self.min_length);

        if validation.outcome.is_accepted() {
            self.score += validation.score_delta;
            self.found_order.push(validation.word.clone());
        }

        validation
    }

    /// Judge the word spelled by a sequence of tile indices
    pub fn submit_indices(&mut self, indices: &[usize]) -> Validation {
        let candidate = self.word_from_indices(indices);
        self.submit(&candidate)
    }

    /// Every possible word has been found
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.possible.is_empty() && self.found.len() == self.possible.len()
    }

    /// Found words, alphabetically
    #[must_use]
    pub fn found_sorted(&self) -> Vec<&str> {
        sorted(self.found.iter())
    }

    /// Possible words not yet found, alphabetically
    #[must_use]
    pub fn missing(&self) -> Vec<&str> {
        sorted(self.possible.difference(&self.found))
    }
}

fn sorted<'a>(words: impl Iterator<Item = &'a String>) -> Vec<&'a str> {
    let mut words: Vec<&str> = words.map(String::as_str).collect();
    words.sort_unstable();
    words
}
