//! Word lists for the word game
//!
//! Provides embedded word lists compiled into the binary for zero-cost access.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{
    DICTIONARY, DICTIONARY_COUNT, LISTENING_WORDS, LISTENING_WORDS_COUNT, START_WORDS,
    START_WORDS_COUNT,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{can_form, letter_frequencies};

    #[test]
    fn counts_match_consts() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
        assert_eq!(LISTENING_WORDS.len(), LISTENING_WORDS_COUNT);
    }

    #[test]
    fn expected_counts() {
        assert_eq!(DICTIONARY_COUNT, 199, "Expected 199 dictionary words");
        assert_eq!(START_WORDS_COUNT, 6, "Expected 6 start words");
        assert_eq!(LISTENING_WORDS_COUNT, 10, "Expected 10 listening words");
    }

    #[test]
    fn lists_are_uppercase_letters() {
        for &word in DICTIONARY.iter().chain(START_WORDS).chain(LISTENING_WORDS) {
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn start_words_are_dictionary_words() {
        for &start in START_WORDS {
            assert!(DICTIONARY.contains(&start), "'{start}' not in dictionary");
        }
    }

    #[test]
    fn every_dictionary_word_is_reachable() {
        let pools: Vec<_> = START_WORDS
            .iter()
            .map(|start| letter_frequencies(start.chars()))
            .collect();

        for &word in DICTIONARY {
            assert!(
                pools.iter().any(|counts| can_form(word, counts)),
                "'{word}' cannot be formed from any start word"
            );
        }
    }
}
