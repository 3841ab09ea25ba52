use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;

use roster_config::{ClientConfig, ConfigError, ConfigLoader};

#[test]
fn env_file_values_override_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ROSTER_API_URL=http://users.internal:8080/").unwrap();
    writeln!(file, "ROSTER_REQUEST_TIMEOUT=3s").unwrap();
    writeln!(file, "ROSTER_PER_PAGE=25").unwrap();

    let config = ConfigLoader::new()
        .with_env_file(file.path())
        .without_process_env()
        .load()
        .unwrap();

    assert_eq!(config.api_url, "http://users.internal:8080");
    assert_eq!(config.request_timeout, Duration::from_secs(3));
    assert_eq!(config.per_page, 25);
    assert_eq!(config.notification_ttl, Duration::from_secs(5));
}

#[test]
fn missing_env_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigLoader::new()
        .with_env_file(dir.path().join("does-not-exist.env"))
        .without_process_env()
        .load()
        .unwrap();
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn malformed_duration_is_reported_with_its_key() {
    let vars = HashMap::from([(
        "ROSTER_NOTIFICATION_TTL".to_string(),
        "soon".to_string(),
    )]);
    let err = ConfigLoader::from_vars(&vars).unwrap_err();
    match err {
        ConfigError::InvalidDuration { key, value, .. } => {
            assert_eq!(key, "ROSTER_NOTIFICATION_TTL");
            assert_eq!(value, "soon");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn blank_values_are_ignored() {
    let vars = HashMap::from([
        ("ROSTER_API_URL".to_string(), "   ".to_string()),
        ("ROSTER_PER_PAGE".to_string(), "".to_string()),
    ]);
    let config = ConfigLoader::from_vars(&vars).unwrap();
    assert_eq!(config.api_url, "http://localhost:5000");
    assert_eq!(config.per_page, 50);
}
