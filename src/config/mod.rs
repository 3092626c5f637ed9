//! Settings for `topsis serve`.
//!
//! Read once at startup from the process environment, after merging a
//! `.env` file when one exists. Keys carry the `TOPSIS` prefix and `__`
//! between sections, so `TOPSIS__SERVER__PORT=3000` sets `server.port`.
//! Every section has defaults; an empty environment serves download-only
//! results on `0.0.0.0:8080`.
//!
//! `topsis rank` never reads this module.
//!
//! ```no_run
//! use topsis_rank::config::AppConfig;
//!
//! # fn main() -> Result<(), topsis_rank::config::ConfigError> {
//! let config = AppConfig::load()?;
//! config.validate()?;
//! println!("listening on {}", config.server.socket_addr()?);
//! # Ok(())
//! # }
//! ```

mod email;
mod error;
mod output;
mod server;

pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use output::OutputConfig;
pub use server::{LogFormat, ServerConfig};

use serde::Deserialize;

const ENV_PREFIX: &str = "TOPSIS";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Present only when `TOPSIS__EMAIL__*` keys are set; results are
    /// download-only otherwise.
    #[serde(default)]
    pub email: Option<EmailConfig>,

    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Reads `.env` (if any) and the `TOPSIS__*` variables.
    ///
    /// Fails only when a value cannot be converted to its field type.
    /// Range and format checks live in [`validate`](Self::validate).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let source = config::Environment::default()
            .prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR);

        Ok(config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?)
    }

    /// Checks every section, then that a mail send can finish inside the
    /// request that triggered it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.output.validate()?;

        if let Some(email) = &self.email {
            email.validate()?;
            if email.timeout_secs >= self.server.request_timeout_secs {
                return Err(ValidationError::EmailOutlastsRequest {
                    email_secs: email.timeout_secs,
                    request_secs: self.server.request_timeout_secs,
                });
            }
        }
        Ok(())
    }

    pub fn email_enabled(&self) -> bool {
        self.email.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Process environment is shared by every test thread.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Loads with `vars` set, removing them again before returning.
    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let loaded = AppConfig::load();
        for (key, _) in vars {
            env::remove_var(key);
        }
        loaded
    }

    #[test]
    fn empty_environment_serves_download_only() {
        let config = load_with(&[]).unwrap();

        assert_eq!(config.server.port, 8080);
        assert!(!config.email_enabled());
        assert_eq!(config.output.download_file_name, "result.csv");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn nested_keys_reach_their_sections() {
        let config = load_with(&[
            ("TOPSIS__SERVER__PORT", "3000"),
            ("TOPSIS__SERVER__LOG_FORMAT", "json"),
            ("TOPSIS__SERVER__MAX_BODY_BYTES", "4096"),
            ("TOPSIS__OUTPUT__DOWNLOAD_FILE_NAME", "ranking.csv"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert!(config.server.json_logs());
        assert_eq!(config.server.max_body_bytes, 4096);
        assert_eq!(config.output.download_file_name, "ranking.csv");
    }

    #[test]
    fn email_keys_enable_delivery() {
        let config = load_with(&[
            ("TOPSIS__EMAIL__RESEND_API_KEY", "re_test123"),
            ("TOPSIS__EMAIL__FROM_EMAIL", "results@example.com"),
        ])
        .unwrap();

        let email = config.email.as_ref().unwrap();
        assert_eq!(email.resend_api_key.expose_secret(), "re_test123");
        assert_eq!(email.from_email, "results@example.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_log_format_fails_to_load() {
        let result = load_with(&[("TOPSIS__SERVER__LOG_FORMAT", "staging")]);
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn non_numeric_port_fails_to_load() {
        let result = load_with(&[("TOPSIS__SERVER__PORT", "abc")]);
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn mail_timeout_must_fit_inside_request_timeout() {
        let mut email = EmailConfig::new("re_abcd1234");
        email.timeout_secs = 30;
        let config = AppConfig {
            email: Some(email),
            ..Default::default()
        };

        assert_eq!(
            config.validate(),
            Err(ValidationError::EmailOutlastsRequest {
                email_secs: 30,
                request_secs: 30,
            })
        );
    }

    #[test]
    fn invalid_email_section_fails_validation() {
        let config = AppConfig {
            email: Some(EmailConfig::new("sk_wrong")),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidResendKey));
    }
}
