//! Game configuration

use crate::matcher::MIN_WORD_LENGTH;
use std::fmt;

/// Default round length in seconds
pub const ROUND_DURATION_SECONDS: u32 = 60;

/// Seconds left when the clock starts warning the player
pub const CLOCK_WARNING_SECONDS: u32 = 10;

/// Tunable rules for a Slice Mode session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Shortest word a player may submit
    pub min_word_length: usize,
    /// Seconds on the clock at the start of each round
    pub round_duration: u32,
    /// Remaining seconds at which the countdown warns
    pub clock_warning: u32,
    /// Rounds to play; clearing every word of a round moves on to the next
    pub rounds: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_word_length: MIN_WORD_LENGTH,
            round_duration: ROUND_DURATION_SECONDS,
            clock_warning: CLOCK_WARNING_SECONDS,
            rounds: 1,
        }
    }
}

/// Error type for invalid configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroMinLength,
    ZeroDuration,
    ZeroRounds,
    WarningNotBeforeEnd { warning: u32, duration: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMinLength => write!(f, "Minimum word length must be at least 1"),
            Self::ZeroDuration => write!(f, "Round duration must be at least 1 second"),
            Self::ZeroRounds => write!(f, "At least one round must be played"),
            Self::WarningNotBeforeEnd { warning, duration } => write!(
                f,
                "Clock warning at {warning}s must be shorter than the {duration}s round"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Check the configuration is playable
    ///
    /// # Errors
    /// Returns `ConfigError` if the minimum length, duration or round count
    /// is zero, or the warning would fire at or after the round starts.
    pub const fn validate(self) -> Result<Self, ConfigError> {
        if self.min_word_length == 0 {
            return Err(ConfigError::ZeroMinLength);
        }
        if self.round_duration == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if self.rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        if self.clock_warning >= self.round_duration {
            return Err(ConfigError::WarningNotBeforeEnd {
                warning: self.clock_warning,
                duration: self.round_duration,
            });
        }
        Ok(self)
    }
}
