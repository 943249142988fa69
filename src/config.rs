//! Application configuration: a TOML settings file plus environment overrides.

mod errors;
mod load;
mod types;

pub use errors::ConfigError;
pub use load::{
    BASE_URL_ENV, REQUEST_TIMEOUT_ENV, apply_env_overrides, config_path, load_from_path,
    load_or_default, validate_base_url,
};
pub use types::{ApiSettings, AppConfig, TargetSettings};

/// File name of the settings file inside the app directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
