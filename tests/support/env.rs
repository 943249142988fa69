use std::{
    path::PathBuf,
    sync::{Mutex, MutexGuard, OnceLock},
};

use fairpredict::app_dirs::CONFIG_HOME_ENV;
use fairpredict::config::{BASE_URL_ENV, REQUEST_TIMEOUT_ENV};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const MANAGED: [&str; 3] = [CONFIG_HOME_ENV, BASE_URL_ENV, REQUEST_TIMEOUT_ENV];

/// Serializes environment changes and restores the previous values on drop.
pub struct EnvGuard {
    previous: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    /// Point the app directory at `path` and clear every override.
    pub fn with_config_home(path: PathBuf) -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|err| err.into_inner());
        let previous = MANAGED
            .iter()
            .map(|key| (*key, std::env::var(key).ok()))
            .collect();
        let guard = Self {
            previous,
            _lock: lock,
        };
        for key in MANAGED {
            guard.remove(key);
        }
        guard.set(CONFIG_HOME_ENV, path.to_string_lossy().as_ref());
        guard
    }

    pub fn set(&self, key: &str, value: &str) {
        // SAFETY: env mutation happens only while ENV_LOCK is held.
        unsafe {
            std::env::set_var(key, value);
        }
    }

    pub fn remove(&self, key: &str) {
        // SAFETY: env mutation happens only while ENV_LOCK is held.
        unsafe {
            std::env::remove_var(key);
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in std::mem::take(&mut self.previous) {
            match value {
                Some(value) => self.set(key, &value),
                None => self.remove(key),
            }
        }
    }
}
