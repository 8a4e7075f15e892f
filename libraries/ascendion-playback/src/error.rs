//! Error types for playback management

use ascendion_core::CoreError;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No catalog item matched the requested id
    #[error("Track not found: {0}")]
    TrackNotFound(String),

    /// "Play all" was requested on collections without songs
    #[error("Nothing to play")]
    NothingToPlay,

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Domain error (malformed duration, bad catalog data)
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl PlaybackError {
    /// Whether this error means the id was unknown
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TrackNotFound(_))
    }

    /// Whether this error came from a malformed duration string
    pub fn is_invalid_duration(&self) -> bool {
        matches!(self, Self::Core(CoreError::InvalidDuration { .. }))
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
