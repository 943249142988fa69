mod support;

use fairpredict::app_dirs::APP_DIR_NAME;
use fairpredict::config::{self, AppConfig, BASE_URL_ENV, ConfigError, REQUEST_TIMEOUT_ENV};
use std::path::Path;
use support::env::EnvGuard;

fn write_config(home: &Path, text: &str) {
    let dir = home.join(APP_DIR_NAME);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(config::CONFIG_FILE_NAME), text).unwrap();
}

#[test]
fn missing_file_yields_defaults_under_config_home() {
    let temp = tempfile::tempdir().unwrap();
    let _env = EnvGuard::with_config_home(temp.path().to_path_buf());

    let loaded = config::load_or_default().unwrap();
    assert_eq!(loaded, AppConfig::default());
    assert_eq!(
        config::config_path().unwrap(),
        temp.path().join(APP_DIR_NAME).join("config.toml")
    );
}

#[test]
fn file_settings_then_env_overrides_apply() {
    let temp = tempfile::tempdir().unwrap();
    let env = EnvGuard::with_config_home(temp.path().to_path_buf());
    write_config(
        temp.path(),
        r#"
[api]
base_url = "http://10.1.2.3:9000/"
request_timeout_secs = 15

[targets]
desirable_class = "Enrolled"
"#,
    );

    let loaded = config::load_or_default().unwrap();
    assert_eq!(loaded.api.base_url, "http://10.1.2.3:9000");
    assert_eq!(loaded.api.request_timeout_secs, 15);
    assert_eq!(loaded.targets.desirable_class, "Enrolled");
    assert_eq!(loaded.targets.undesirable_class, "Dropout");

    env.set(BASE_URL_ENV, "https://models.example.org/api");
    env.set(REQUEST_TIMEOUT_ENV, "5");
    let overridden = config::load_or_default().unwrap();
    assert_eq!(overridden.api.base_url, "https://models.example.org/api");
    assert_eq!(overridden.api.request_timeout_secs, 5);
}

#[test]
fn invalid_inputs_are_reported() {
    let temp = tempfile::tempdir().unwrap();
    let env = EnvGuard::with_config_home(temp.path().to_path_buf());

    write_config(temp.path(), "[api]\nbase_url = \"ftp://example.org\"\n");
    assert!(matches!(
        config::load_or_default(),
        Err(ConfigError::InvalidBaseUrl { .. })
    ));

    write_config(temp.path(), "[api\n");
    assert!(matches!(
        config::load_or_default(),
        Err(ConfigError::ParseToml { .. })
    ));

    write_config(temp.path(), "");
    env.set(REQUEST_TIMEOUT_ENV, "soon");
    assert!(matches!(
        config::load_or_default(),
        Err(ConfigError::InvalidEnv { .. })
    ));
}
