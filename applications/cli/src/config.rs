/// CLI configuration
use crate::error::{CliError, Result};
use ascendion_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "ascendion.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default = "default_logging")]
    pub logging: LoggingSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Catalog used when a command gets no `--catalog`
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (ASCENDION_PLAYBACK__VOLUME=60)
        settings = settings.add_source(
            config::Environment::with_prefix("ASCENDION")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let playback = &self.playback;

        if playback.volume > 100 {
            return Err(CliError::config(format!(
                "playback.volume must be 0-100, got {}",
                playback.volume
            )));
        }

        if playback.placeholder_duration_min_secs > playback.placeholder_duration_max_secs {
            return Err(CliError::config(format!(
                "playback.placeholder_duration_min_secs ({}) exceeds the max ({})",
                playback.placeholder_duration_min_secs, playback.placeholder_duration_max_secs
            )));
        }

        if self.logging.filter.trim().is_empty() {
            return Err(CliError::config("logging.filter must not be empty"));
        }

        Ok(())
    }
}

// Default values
fn default_logging() -> LoggingSettings {
    LoggingSettings {
        filter: default_filter(),
    }
}

fn default_filter() -> String {
    "ascendion=info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        default_logging()
    }
}
