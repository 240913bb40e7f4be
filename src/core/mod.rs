//! Core domain types for the word game
//!
//! Letter multisets and scoring, with no game state and no I/O.

mod letters;
mod scoring;

pub use letters::{LetterCounts, can_form, letter_frequencies, normalize};
pub use scoring::{POINTS_PER_LETTER, length_bonus, points_for_word};
