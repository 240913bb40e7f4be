//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_results, print_game_over, print_round_header, print_solve_result,
    print_validation,
};
