//! Ascendion CLI Library
//!
//! Developer tooling that drives the playback model from JSON files.
//!
//! This library exposes the core components for testing purposes.

pub mod config;
pub mod error;
pub mod replay;

// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use error::{CliError, Result};
pub use replay::{ReplayReport, StepError};
