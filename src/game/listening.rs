//! Listening Mode
//!
//! The player is given the letters of a word in scrambled order and types
//! the word they think it spells.

use super::error::GameError;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::fmt;

/// Reshuffles allowed while the scramble still spells the answer
const SCRAMBLE_RETRIES: usize = 10;

/// Prompt shown the first time letters are presented in a session
pub const INTRO: [&str; 3] = [
    "Here are the letters.",
    "They are scrambled.",
    "Try to make a word.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListeningOutcome {
    /// Nothing but whitespace was typed
    Empty,
    Correct,
    Incorrect,
}

impl ListeningOutcome {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Empty => "Type a guess first.",
            Self::Correct => "Correct.",
            Self::Incorrect => "Not quite. Try again.",
        }
    }
}

impl fmt::Display for ListeningOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// One word to guess and its scrambled letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListeningChallenge {
    answer: String,
    scrambled: Vec<char>,
}

impl ListeningChallenge {
    /// Scramble `word`, reshuffling a few times if the result spells the
    /// word again
    pub fn new<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Self {
        let answer = word.trim().to_uppercase();
        let original: Vec<char> = answer.chars().collect();
        let mut scrambled = original.clone();

        if scrambled.len() > 1 {
            for _ in 0..SCRAMBLE_RETRIES {
                scrambled.shuffle(rng);
                if scrambled != original {
                    break;
                }
            }
        }

        Self { answer, scrambled }
    }

    #[inline]
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[inline]
    #[must_use]
    pub fn scrambled(&self) -> &[char] {
        &self.scrambled
    }

    /// Compare a typed guess with the answer
    ///
    /// Surrounding whitespace and inner spaces are ignored, as is case.
    ///
    /// # Examples
    /// ```
    /// use wordronin::game::{ListeningChallenge, ListeningOutcome};
    ///
    /// let challenge = ListeningChallenge::new("TRUTH", &mut rand::rng());
    /// assert_eq!(challenge.check(" tr uth\n"), ListeningOutcome::Correct);
    /// assert_eq!(challenge.check("truce"), ListeningOutcome::Incorrect);
    /// assert_eq!(challenge.check("   "), ListeningOutcome::Empty);
    /// ```
    #[must_use]
    pub fn check(&self, guess: &str) -> ListeningOutcome {
        let cleaned = clean(guess);

        if cleaned.is_empty() {
            ListeningOutcome::Empty
        } else if cleaned == clean(&self.answer) {
            ListeningOutcome::Correct
        } else {
            ListeningOutcome::Incorrect
        }
    }
}

fn clean(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|&c| c != ' ')
        .flat_map(char::to_lowercase)
        .collect()
}

/// A run of Listening Mode challenges over a word bank
pub struct ListeningGame<R: Rng> {
    bank: Vec<String>,
    rng: R,
    current: ListeningChallenge,
    intro_pending: bool,
}

impl<R: Rng> ListeningGame<R> {
    /// Start with a random word from `bank`
    ///
    /// # Errors
    /// Returns `GameError::EmptyListeningBank` if `bank` has no words.
    pub fn new(bank: Vec<String>, mut rng: R) -> Result<Self, GameError> {
        let word = bank.choose(&mut rng).ok_or(GameError::EmptyListeningBank)?;
        let current = ListeningChallenge::new(word, &mut rng);

        Ok(Self {
            bank,
            rng,
            current,
            intro_pending: true,
        })
    }

    #[inline]
    #[must_use]
    pub const fn current(&self) -> &ListeningChallenge {
        &self.current
    }

    /// Move to a different word from the bank
    ///
    /// The previous word is never repeated unless it is the only word.
    pub fn next_word(&mut self) -> &ListeningChallenge {
        let previous = self.current.answer();
        let fresh: Vec<&String> = self
            .bank
            .iter()
            .filter(|word| !word.trim().eq_ignore_ascii_case(previous))
            .collect();

        let next = fresh
            .choose(&mut self.rng)
            .map_or_else(|| previous.to_string(), |word| (*word).clone());

        self.current = ListeningChallenge::new(&next, &mut self.rng);
        &self.current
    }

    /// The intro prompt, only on the first call of the session
    pub fn take_intro(&mut self) -> Option<&'static [&'static str]> {
        if self.intro_pending {
            self.intro_pending = false;
            Some(&INTRO[..])
        } else {
            None
        }
    }

    #[must_use]
    pub fn check(&self, guess: &str) -> ListeningOutcome {
        self.current.check(guess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::LISTENING_WORDS;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted(letters: &[char]) -> Vec<char> {
        let mut letters = letters.to_vec();
        letters.sort_unstable();
        letters
    }

    #[test]
    fn scramble_keeps_letters_and_moves_them() {
        let mut rng = StdRng::seed_from_u64(3);
        for &word in LISTENING_WORDS {
            let challenge = ListeningChallenge::new(word, &mut rng);
            let original: Vec<char> = word.chars().collect();

            assert_eq!(sorted(challenge.scrambled()), sorted(&original));
            assert_ne!(challenge.scrambled(), original.as_slice(), "{word} unscrambled");
        }
    }

    #[test]
    fn single_letter_is_left_alone() {
        let challenge = ListeningChallenge::new("a", &mut StdRng::seed_from_u64(0));
        assert_eq!(challenge.answer(), "A");
        assert_eq!(challenge.scrambled(), &['A']);
    }

    #[test]
    fn check_normalizes_guess() {
        let challenge = ListeningChallenge::new("ORDER", &mut StdRng::seed_from_u64(0));
        assert_eq!(challenge.check("order"), ListeningOutcome::Correct);
        assert_eq!(challenge.check("  O R D E R \n"), ListeningOutcome::Correct);
        assert_eq!(challenge.check("odder"), ListeningOutcome::Incorrect);
        assert_eq!(challenge.check(""), ListeningOutcome::Empty);
        assert_eq!(challenge.check(" \t\n"), ListeningOutcome::Empty);
    }

    #[test]
    fn check_allows_retries() {
        let challenge = ListeningChallenge::new("TRIP", &mut StdRng::seed_from_u64(0));
        assert_eq!(challenge.check("PIRT"), ListeningOutcome::Incorrect);
        assert_eq!(challenge.check("TRIP"), ListeningOutcome::Correct);
        assert_eq!(challenge.check("TRIP"), ListeningOutcome::Correct);
    }

    #[test]
    fn next_word_never_repeats() {
        let mut game = ListeningGame::new(
            words_from_slice(LISTENING_WORDS),
            StdRng::seed_from_u64(11),
        )
        .unwrap();

        for _ in 0..50 {
            let previous = game.current().answer().to_string();
            let next = game.next_word().answer().to_string();
            assert_ne!(previous, next);
            assert!(LISTENING_WORDS.contains(&next.as_str()));
        }
    }

    #[test]
    fn single_word_bank_repeats() {
        let mut game =
            ListeningGame::new(vec!["TRUTH".to_string()], StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(game.next_word().answer(), "TRUTH");
    }

    #[test]
    fn empty_bank_is_error() {
        let game = ListeningGame::new(Vec::new(), StdRng::seed_from_u64(0));
        assert!(matches!(game, Err(GameError::EmptyListeningBank)));
    }

    #[test]
    fn intro_only_once() {
        let mut game = ListeningGame::new(
            words_from_slice(LISTENING_WORDS),
            StdRng::seed_from_u64(0),
        )
        .unwrap();

        assert_eq!(game.take_intro(), Some(&INTRO[..]));
        assert_eq!(game.take_intro(), None);
        game.next_word();
        assert_eq!(game.take_intro(), None);
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(ListeningOutcome::Empty.to_string(), "Type a guess first.");
        assert_eq!(ListeningOutcome::Correct.to_string(), "Correct.");
        assert_eq!(
            ListeningOutcome::Incorrect.to_string(),
            "Not quite. Try again."
        );
    }
}
