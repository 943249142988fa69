use std::path::PathBuf;

use thiserror::Error;

/// Errors that may occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The app directory could not be resolved or created.
    #[error("Config directory unavailable: {0}")]
    AppDir(#[from] crate::app_dirs::AppDirError),
    /// Failed to read the config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to parse the TOML config.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        /// TOML file path.
        path: PathBuf,
        /// TOML parse error.
        source: toml::de::Error,
    },
    /// The API base URL is not an absolute http(s) URL.
    #[error("Invalid API base URL {value:?}: {reason}")]
    InvalidBaseUrl {
        /// Offending value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
    /// An environment override could not be parsed.
    #[error("Invalid value {value:?} for {key}")]
    InvalidEnv {
        /// Environment variable name.
        key: &'static str,
        /// Offending value.
        value: String,
    },
}
