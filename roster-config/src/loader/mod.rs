pub mod error;

use std::collections::HashMap;
use std::path::PathBuf;

use log::debug;

use crate::constants::{
    ENV_API_URL, ENV_NOTIFICATION_TTL, ENV_PER_PAGE, ENV_REQUEST_TIMEOUT,
};
use crate::models::ClientConfig;
use error::ConfigError;

const KNOWN_KEYS: [&str; 4] = [
    ENV_API_URL,
    ENV_REQUEST_TIMEOUT,
    ENV_PER_PAGE,
    ENV_NOTIFICATION_TTL,
];

/// Merges defaults, an optional `.env` file and the process environment.
///
/// Later sources win. The `.env` file is read without touching the process
/// environment so loading is side-effect free.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    env_file: Option<PathBuf>,
    use_process_env: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            env_file: Some(PathBuf::from(".env")),
            use_process_env: true,
        }
    }

    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    pub fn without_env_file(mut self) -> Self {
        self.env_file = None;
        self
    }

    pub fn without_process_env(mut self) -> Self {
        self.use_process_env = false;
        self
    }

    pub fn load(&self) -> Result<ClientConfig, ConfigError> {
        let mut vars = HashMap::new();

        if let Some(path) = &self.env_file {
            match dotenvy::from_path_iter(path) {
                Ok(iter) => {
                    for item in iter {
                        let (key, value) = item?;
                        vars.insert(key, value);
                    }
                }
                Err(err) if err.not_found() => {
                    debug!("[Config] No env file at {}, skipping", path.display());
                }
                Err(err) => return Err(err.into()),
            }
        }

        if self.use_process_env {
            for key in KNOWN_KEYS {
                if let Ok(value) = std::env::var(key) {
                    vars.insert(key.to_string(), value);
                }
            }
        }

        Self::from_vars(&vars)
    }

    /// Build a validated config from already-collected key/value pairs.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<ClientConfig, ConfigError> {
        let mut config = ClientConfig::default();

        if let Some(url) = non_empty(vars, ENV_API_URL) {
            config.api_url = url.to_string();
        }
        if let Some(raw) = non_empty(vars, ENV_REQUEST_TIMEOUT) {
            config.request_timeout = parse_duration(ENV_REQUEST_TIMEOUT, raw)?;
        }
        if let Some(raw) = non_empty(vars, ENV_PER_PAGE) {
            config.per_page = raw.parse().map_err(|_| ConfigError::InvalidNumber {
                key: ENV_PER_PAGE,
                value: raw.to_string(),
            })?;
        }
        if let Some(raw) = non_empty(vars, ENV_NOTIFICATION_TTL) {
            config.notification_ttl = parse_duration(ENV_NOTIFICATION_TTL, raw)?;
        }

        config.validate()
    }
}

fn non_empty<'a>(vars: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    vars.get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

fn parse_duration(key: &'static str, raw: &str) -> Result<std::time::Duration, ConfigError> {
    humantime::parse_duration(raw).map_err(|source| ConfigError::InvalidDuration {
        key,
        value: raw.to_string(),
        source,
    })
}
