//! Command implementations

pub mod analyze;
pub mod listen;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_start_words, analyze_word};
pub use listen::run_listen;
pub use simple::{PlayerInput, parse_input, run_simple};
pub use solve::{ScoredWord, SolveConfig, SolveResult, solve_letters};
