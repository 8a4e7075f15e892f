/// CLI error types
use ascendion_core::CoreError;
use ascendion_playback::PlaybackError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog: {0}")]
    Catalog(#[source] CoreError),

    #[error("Invalid gesture script: {0}")]
    Script(#[source] serde_json::Error),

    #[error("No catalog given (pass --catalog or set catalog.path)")]
    MissingCatalog,

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),
}

impl CliError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
