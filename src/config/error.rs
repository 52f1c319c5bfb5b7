//! Configuration loading errors.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading [`super::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required setting is absent or empty.
    #[error("missing required setting {0}")]
    MissingSetting(String),

    /// The configuration file could not be read.
    #[error("failed to read config file '{path}': {source}")]
    Read {
        /// Path that was requested.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The configuration document is not valid JSON for [`super::Config`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
