//! WordRonin
//!
//! Word-slicing puzzle engine: given a pool of letter tiles, find every
//! dictionary word the pool can spell, judge submitted words and score them.
//!
//! # Quick Start
//!
//! ```rust
//! use wordronin::core::{can_form, letter_frequencies, points_for_word};
//! use wordronin::matcher::{Outcome, WordSet, validate};
//! use wordronin::wordlists::Dictionary;
//!
//! let pool: Vec<char> = "ORANGE".chars().collect();
//! assert!(can_form("RANGE", &letter_frequencies(pool.iter().copied())));
//!
//! let possible = Dictionary::embedded().possible_words(&pool, 3);
//! let mut found = WordSet::default();
//!
//! let result = validate("range", &possible, &mut found);
//! assert_eq!(result.outcome, Outcome::Accepted);
//! assert_eq!(result.score_delta, points_for_word(5));
//! ```

// Letter counting and scoring
pub mod core;

// Word matching and validation
pub mod matcher;

// Word lists
pub mod wordlists;

// Rounds, sessions and Listening Mode
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
