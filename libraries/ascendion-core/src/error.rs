//! Core error types for AscendionPlay
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for AscendionPlay
#[derive(Error, Debug)]
pub enum CoreError {
    /// A duration string could not be parsed as `M:SS`
    #[error("Invalid duration {input:?}: {reason}")]
    InvalidDuration {
        /// The string as given
        input: String,
        /// Which part of `M:SS` was wrong
        reason: String,
    },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Create an invalid duration error
    pub fn invalid_duration(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDuration {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
