use std::path::{Path, PathBuf};

use url::Url;

use crate::app_dirs;

use super::CONFIG_FILE_NAME;
use super::errors::ConfigError;
use super::types::AppConfig;

/// Overrides `[api] base_url`.
pub const BASE_URL_ENV: &str = "FAIRPREDICT_API_BASE_URL";
/// Overrides `[api] request_timeout_secs`.
pub const REQUEST_TIMEOUT_ENV: &str = "FAIRPREDICT_REQUEST_TIMEOUT_SECS";

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the settings file and apply environment overrides.
///
/// A missing file yields defaults; an unreadable or invalid one is an error.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    let config = load_from_path(&path)?;
    let config = apply_env_overrides(config, |key| std::env::var(key).ok())?;
    tracing::info!(
        base_url = %config.api.base_url,
        timeout_secs = config.api.request_timeout_secs,
        "Loaded configuration"
    );
    Ok(config)
}

/// Parse a settings file, returning defaults when it does not exist.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config = toml::from_str::<AppConfig>(&text)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })?
        .normalized();
    config.api.base_url = validate_base_url(&config.api.base_url)?;
    Ok(config)
}

/// Apply environment overrides on top of file settings.
///
/// `lookup` abstracts the environment so callers and tests can supply values.
pub fn apply_env_overrides(
    mut config: AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<AppConfig, ConfigError> {
    if let Some(value) = non_empty(lookup(BASE_URL_ENV)) {
        config.api.base_url = validate_base_url(&value)?;
    }
    if let Some(value) = non_empty(lookup(REQUEST_TIMEOUT_ENV)) {
        let secs = value
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidEnv {
                key: REQUEST_TIMEOUT_ENV,
                value: value.clone(),
            })?;
        config.api.request_timeout_secs = secs;
    }
    Ok(config.normalized())
}

/// Check that `raw` is an absolute http(s) URL and strip trailing slashes.
pub fn validate_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        value: raw.to_string(),
        reason,
    };
    let parsed = Url::parse(trimmed).map_err(|err| invalid(err.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", parsed.scheme())));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".to_string()));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
