//! Game flow
//!
//! Rounds, timed Slice Mode sessions and Listening Mode, built on the
//! stateless matcher.

mod config;
mod countdown;
mod error;
mod listening;
mod round;
mod session;

pub use config::{CLOCK_WARNING_SECONDS, ConfigError, GameConfig, ROUND_DURATION_SECONDS};
pub use countdown::{Countdown, Tick};
pub use error::GameError;
pub use listening::{INTRO, ListeningChallenge, ListeningGame, ListeningOutcome};
pub use round::Round;
pub use session::{GameOverReason, RoundSummary, Session, SessionState, pick_start_word};
