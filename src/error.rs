//! Error types for the leaderboard
//!
//! Every failure the engine can report is a variant of [`MatbojError`]. All of
//! them except persistence failures are raised before any state is touched.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MatbojError>;

/// Errors raised by the participant store, the rank engine and state storage
#[derive(Debug, Error)]
pub enum MatbojError {
    #[error("Unknown participant: {name}")]
    UnknownParticipant { name: String },

    #[error("The two player names must be distinct: {name}")]
    InvalidMatch { name: String },

    #[error("Duplicate participant in roster: {name}")]
    DuplicateParticipant { name: String },

    #[error("Participant names cannot be empty")]
    EmptyParticipantName,

    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Not enough matches ({available}) to undo match at position -{requested}")]
    PositionOutOfRange { requested: usize, available: usize },

    #[error("Undo position must be at least 1")]
    InvalidPosition,

    #[error("Failed to persist game state: {message}")]
    Persistence { message: String },

    #[error("Corrupt game state: {reason}")]
    CorruptState { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}

impl MatbojError {
    /// Whether the in-memory leaderboard was left untouched by the failed operation
    pub fn is_state_unchanged(&self) -> bool {
        !matches!(self, MatbojError::Persistence { .. })
    }
}

impl From<std::io::Error> for MatbojError {
    fn from(err: std::io::Error) -> Self {
        MatbojError::Persistence {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MatbojError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            MatbojError::Persistence {
                message: err.to_string(),
            }
        } else {
            MatbojError::CorruptState {
                reason: err.to_string(),
            }
        }
    }
}
