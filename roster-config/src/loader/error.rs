use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API URL '{value}'")]
    InvalidApiUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported API URL scheme '{scheme}' (expected http or https)")]
    UnsupportedScheme { scheme: String },
    #[error("per_page must be between 1 and {max}, got {value}")]
    PerPageOutOfRange { value: u32, max: u32 },
    #[error("{key} must be a positive integer, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} is not a valid duration: '{value}'")]
    InvalidDuration {
        key: &'static str,
        value: String,
        #[source]
        source: humantime::DurationError,
    },
    #[error("{key} must be greater than zero")]
    ZeroDuration { key: &'static str },
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
