use std::time::Duration;

use url::Url;

use crate::constants::{
    DEFAULT_API_URL, DEFAULT_NOTIFICATION_TTL, DEFAULT_PER_PAGE,
    DEFAULT_REQUEST_TIMEOUT, MAX_PER_PAGE,
};
use crate::loader::error::ConfigError;

/// Effective client configuration after all sources have been merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the REST backend, without a trailing slash.
    pub api_url: String,
    pub request_timeout: Duration,
    pub per_page: u32,
    pub notification_ttl: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            per_page: DEFAULT_PER_PAGE,
            notification_ttl: DEFAULT_NOTIFICATION_TTL,
        }
    }
}

impl ClientConfig {
    /// Check guard rails and normalize the base URL in place.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        let mut trimmed = self.api_url.trim().trim_end_matches('/').to_string();
        if !trimmed.contains("://") {
            log::warn!(
                "[Config] API URL '{}' has no scheme, assuming http://",
                trimmed
            );
            trimmed = format!("http://{trimmed}");
        }
        let parsed = Url::parse(&trimmed).map_err(|source| ConfigError::InvalidApiUrl {
            value: self.api_url.clone(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                scheme: parsed.scheme().to_string(),
            });
        }
        self.api_url = trimmed;

        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(ConfigError::PerPageOutOfRange {
                value: self.per_page,
                max: MAX_PER_PAGE,
            });
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroDuration {
                key: "request_timeout",
            });
        }
        if self.notification_ttl.is_zero() {
            return Err(ConfigError::ZeroDuration {
                key: "notification_ttl",
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ClientConfig::default().validate().unwrap();
        assert_eq!(config.api_url, "http://localhost:5000");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.notification_ttl, Duration::from_secs(5));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ClientConfig {
            api_url: "http://api.local:8080/".into(),
            ..ClientConfig::default()
        }
        .validate()
        .unwrap();
        assert_eq!(config.api_url, "http://api.local:8080");
    }

    #[test]
    fn missing_scheme_defaults_to_http() {
        let config = ClientConfig {
            api_url: "localhost:5000".into(),
            ..ClientConfig::default()
        }
        .validate()
        .unwrap();
        assert_eq!(config.api_url, "http://localhost:5000");
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = ClientConfig {
            api_url: "ftp://files.local".into(),
            ..ClientConfig::default()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme { .. }));
    }

    #[test]
    fn rejects_page_size_above_backend_cap() {
        let err = ClientConfig {
            per_page: 101,
            ..ClientConfig::default()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, ConfigError::PerPageOutOfRange { value: 101, .. }));
    }
}
