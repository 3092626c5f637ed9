//! Errors raised while reading or checking configuration.

use thiserror::Error;

/// `topsis serve` could not build a usable [`AppConfig`](super::AppConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

/// A loaded value the service cannot run with. Messages name the
/// offending key as it appears after the `TOPSIS__` prefix.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("server.host '{0}' is not an IP address")]
    InvalidHost(String),

    #[error("server.port must not be 0")]
    InvalidPort,

    #[error("server.request_timeout_secs must be at least 1")]
    InvalidTimeout,

    #[error("server.max_body_bytes must be at least 1")]
    InvalidBodyLimit,

    #[error("email.resend_api_key must start with 're_'")]
    InvalidResendKey,

    #[error("email.from_email '{0}' is not an email address")]
    InvalidFromEmail(String),

    #[error("email.api_base_url must be an http or https URL")]
    InvalidEmailApiUrl,

    #[error("email.timeout_secs must be at least 1")]
    InvalidEmailTimeout,

    #[error(
        "email.timeout_secs ({email_secs}) must be shorter than \
         server.request_timeout_secs ({request_secs})"
    )]
    EmailOutlastsRequest { email_secs: u64, request_secs: u64 },

    #[error("output.download_file_name '{0}' must be a plain file name ending in .csv")]
    InvalidDownloadFileName(String),
}
