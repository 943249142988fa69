use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::ActionTargets;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
const DEFAULT_MAX_RESPONSE_BYTES: usize = 1024 * 1024;
const MIN_RESPONSE_BYTES: usize = 1024;

/// Settings loaded once at startup and injected into the controller.
///
/// Config keys (TOML): `[api]`, `[targets]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub targets: TargetSettings,
}

impl AppConfig {
    pub(super) fn normalized(mut self) -> Self {
        self.api = self.api.normalized();
        self
    }
}

/// Where the prediction backend lives and how long to wait for it.
///
/// Config keys: `base_url`, `connect_timeout_secs`, `request_timeout_secs`,
/// `max_response_bytes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Upper bound for one whole request, connect through body.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_max_response_bytes")]
    pub max_response_bytes: usize,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            max_response_bytes: default_max_response_bytes(),
        }
    }
}

impl ApiSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn normalized(mut self) -> Self {
        self.connect_timeout_secs = self.connect_timeout_secs.max(1);
        self.request_timeout_secs = self.request_timeout_secs.max(1);
        self.max_response_bytes = self.max_response_bytes.max(MIN_RESPONSE_BYTES);
        self
    }
}

/// Classes passed to the actionable-explanation endpoint.
///
/// Config keys: `desirable_class`, `undesirable_class`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSettings {
    #[serde(default = "default_desirable_class")]
    pub desirable_class: String,
    #[serde(default = "default_undesirable_class")]
    pub undesirable_class: String,
}

impl Default for TargetSettings {
    fn default() -> Self {
        Self {
            desirable_class: default_desirable_class(),
            undesirable_class: default_undesirable_class(),
        }
    }
}

impl TargetSettings {
    pub fn action_targets(&self) -> ActionTargets {
        ActionTargets {
            target_class: self.desirable_class.clone(),
            undesirable_class: self.undesirable_class.clone(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_max_response_bytes() -> usize {
    DEFAULT_MAX_RESPONSE_BYTES
}

fn default_desirable_class() -> String {
    "Graduate".to_string()
}

fn default_undesirable_class() -> String {
    "Dropout".to_string()
}
