//! Game setup errors

use super::config::ConfigError;
use std::fmt;

/// Error type for sessions that cannot start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidConfig(ConfigError),
    NoStartWords,
    EmptyListeningBank,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(err) => write!(f, "Invalid configuration: {err}"),
            Self::NoStartWords => write!(f, "No start words to build a round from"),
            Self::EmptyListeningBank => write!(f, "Listening word bank is empty"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfig(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfig(err)
    }
}
