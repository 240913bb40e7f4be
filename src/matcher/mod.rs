//! Word matching
//!
//! Stateless operations a round controller calls: which dictionary words a
//! pool can spell, and how a submitted word is judged.

mod generator;
mod validation;

pub use generator::{MIN_WORD_LENGTH, WordSet, possible_words};
pub use validation::{Outcome, Validation, validate, validate_with_min_length};
