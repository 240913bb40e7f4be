//! Candidate validation
//!
//! One step of the round state machine: classify a submitted word, record it
//! when accepted and report the points it earns.

use super::generator::{MIN_WORD_LENGTH, WordSet};
use crate::core::{normalize, points_for_word};
use log::debug;
use std::fmt;

/// Result category of a submitted word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Fewer letters than the round allows
    TooShort,
    /// Not among the round's possible words
    NotAWord,
    /// Already found earlier this round
    AlreadyFound,
    /// New valid word, now recorded as found
    Accepted,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Short player-facing description
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::TooShort => "Too short",
            Self::NotAWord => "Not a word",
            Self::AlreadyFound => "Already found",
            Self::Accepted => "Nice!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// What happened to a submitted word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    /// The candidate, uppercased
    pub word: String,
    pub outcome: Outcome,
    /// Points earned; zero unless accepted
    pub score_delta: u32,
    /// Every possible word has now been found
    pub round_complete: bool,
}

impl Validation {
    const fn rejected(word: String, outcome: Outcome) -> Self {
        Self {
            word,
            outcome,
            score_delta: 0,
            round_complete: false,
        }
    }
}

/// Validate `candidate` with the default minimum length of three letters
///
/// # Examples
/// ```
/// use wordronin::matcher::{Outcome, WordSet, validate};
///
/// let possible: WordSet = ["RANGE".to_string(), "EAR".to_string()].into_iter().collect();
/// let mut found = WordSet::default();
///
/// let first = validate("range", &possible, &mut found);
/// assert_eq!(first.outcome, Outcome::Accepted);
/// assert_eq!(first.score_delta, 400);
///
/// let again = validate("RANGE", &possible, &mut found);
/// assert_eq!(again.outcome, Outcome::AlreadyFound);
/// assert_eq!(again.score_delta, 0);
/// ```
pub fn validate(candidate: &str, possible: &WordSet, found: &mut WordSet) -> Validation {
    validate_with_min_length(candidate, possible, found, MIN_WORD_LENGTH)
}

/// Validate `candidate` against the round's possible and found words
///
/// Checks run in order: length, membership in `possible`, membership in
/// `found`. Only an accepted word is inserted into `found`, so `found` stays
/// a subset of `possible`.
pub fn validate_with_min_length(
    candidate: &str,
    possible: &WordSet,
    found: &mut WordSet,
    min_length: usize,
) -> Validation {
    let word = normalize(candidate);
    let length = word.chars().count();

    let validation = if length < min_length {
        Validation::rejected(word, Outcome::TooShort)
    } else if !possible.contains(&word) {
        Validation::rejected(word, Outcome::NotAWord)
    } else if found.contains(&word) {
        Validation::rejected(word, Outcome::AlreadyFound)
    } else {
        found.insert(word.clone());
        Validation {
            word,
            outcome: Outcome::Accepted,
            score_delta: points_for_word(length),
            round_complete: found.len() == possible.len(),
        }
    };

    debug!(
        "validated {:?}: {:?} (+{})",
        validation.word, validation.outcome, validation.score_delta
    );
    validation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::possible_words;
    use crate::wordlists::DICTIONARY;

    fn orange_words() -> WordSet {
        let pool: Vec<char> = "ORANGE".chars().collect();
        possible_words(&pool, MIN_WORD_LENGTH, DICTIONARY)
    }

    fn set(words: &[&str]) -> WordSet {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn accepts_then_reports_already_found() {
        let possible = orange_words();
        let mut found = WordSet::default();

        let first = validate("RANGE", &possible, &mut found);
        assert_eq!(first.outcome, Outcome::Accepted);
        assert_eq!(first.score_delta, 400);
        assert!(!first.round_complete);
        assert!(found.contains("RANGE"));

        let second = validate("RANGE", &possible, &mut found);
        assert_eq!(second.outcome, Outcome::AlreadyFound);
        assert_eq!(second.score_delta, 0);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn too_short_is_checked_first() {
        let possible = set(&["GO"]);
        let mut found = WordSet::default();

        let result = validate("GO", &possible, &mut found);
        assert_eq!(result.outcome, Outcome::TooShort);
        assert!(found.is_empty());
    }

    #[test]
    fn empty_candidate_is_too_short() {
        let mut found = WordSet::default();
        let result = validate("", &orange_words(), &mut found);
        assert_eq!(result.outcome, Outcome::TooShort);
        assert_eq!(result.score_delta, 0);
    }

    #[test]
    fn unknown_word_is_rejected() {
        let mut found = WordSet::default();
        let result = validate("GEARS", &orange_words(), &mut found);
        assert_eq!(result.outcome, Outcome::NotAWord);
        assert!(found.is_empty());
    }

    #[test]
    fn candidate_is_uppercased() {
        let mut found = WordSet::default();
        let result = validate("Organ", &orange_words(), &mut found);
        assert_eq!(result.word, "ORGAN");
        assert!(result.outcome.is_accepted());
        assert!(found.contains("ORGAN"));
    }

    #[test]
    fn custom_min_length() {
        let possible = set(&["EAR", "EARN"]);
        let mut found = WordSet::default();

        let short = validate_with_min_length("EAR", &possible, &mut found, 4);
        assert_eq!(short.outcome, Outcome::TooShort);

        let ok = validate_with_min_length("EARN", &possible, &mut found, 4);
        assert_eq!(ok.outcome, Outcome::Accepted);
        assert_eq!(ok.score_delta, 250);
    }

    #[test]
    fn full_clear_reports_round_complete() {
        let possible = set(&["EAR", "ERA", "ARE"]);
        let mut found = WordSet::default();

        assert!(!validate("EAR", &possible, &mut found).round_complete);
        assert!(!validate("ERA", &possible, &mut found).round_complete);
        let last = validate("ARE", &possible, &mut found);
        assert!(last.outcome.is_accepted());
        assert!(last.round_complete);
    }

    #[test]
    fn rejections_never_complete_a_round() {
        let possible = set(&["EAR"]);
        let mut found = set(&["EAR"]);
        let result = validate("EAR", &possible, &mut found);
        assert_eq!(result.outcome, Outcome::AlreadyFound);
        assert!(!result.round_complete);
    }

    #[test]
    fn found_stays_subset_of_possible() {
        let possible = orange_words();
        let mut found = WordSet::default();
        let attempts = [
            "RANGE", "range", "GEARS", "", "AG", "ORANGE", "ERROR", "EON", "EON", "PLANET",
        ];

        let mut total = 0;
        for attempt in attempts {
            total += validate(attempt, &possible, &mut found).score_delta;
            assert!(found.is_subset(&possible));
        }

        assert_eq!(found.len(), 3);
        assert_eq!(total, 400 + 600 + 150);
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(Outcome::TooShort.to_string(), "Too short");
        assert_eq!(Outcome::AlreadyFound.to_string(), "Already found");
        assert!(Outcome::Accepted.is_accepted());
        assert!(!Outcome::NotAWord.is_accepted());
    }
}
