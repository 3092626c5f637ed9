//! Resend Mailer - delivers result files through the Resend email API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = EmailConfig::new(api_key).with_from("TOPSIS", "results@example.com");
//! let mailer = ResendMailer::new(config)?;
//! mailer.send_result(&email).await?;
//! ```

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Serialize;
use std::time::Duration;

use crate::config::EmailConfig;
use crate::ports::{validate_recipient, DeliveryError, ResultEmail, ResultMailer};

/// Request body for `POST /emails`.
#[derive(Debug, Serialize, PartialEq)]
struct SendEmailRequest {
    from: String,
    to: Vec<String>,
    subject: String,
    text: String,
    attachments: Vec<Attachment>,
}

#[derive(Debug, Serialize, PartialEq)]
struct Attachment {
    filename: String,
    /// Base64-encoded file content.
    content: String,
}

/// Resend email API adapter.
pub struct ResendMailer {
    config: EmailConfig,
    client: Client,
}

impl ResendMailer {
    /// Create a new mailer with the given configuration.
    pub fn new(config: EmailConfig) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Builds the emails endpoint URL.
    fn emails_url(&self) -> String {
        format!("{}/emails", self.config.api_base_url.trim_end_matches('/'))
    }

    fn to_request(&self, email: &ResultEmail) -> SendEmailRequest {
        SendEmailRequest {
            from: self.config.from_header(),
            to: vec![email.recipient.trim().to_string()],
            subject: email.subject.clone(),
            text: email.body.clone(),
            attachments: vec![Attachment {
                filename: email.attachment_name.clone(),
                content: STANDARD.encode(email.attachment.as_bytes()),
            }],
        }
    }
}

#[async_trait]
impl ResultMailer for ResendMailer {
    async fn send_result(&self, email: &ResultEmail) -> Result<(), DeliveryError> {
        validate_recipient(&email.recipient)?;

        let response = self
            .client
            .post(self.emails_url())
            .bearer_auth(self.config.resend_api_key.expose_secret())
            .json(&self.to_request(email))
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                recipient = %email.recipient,
                "Email provider rejected result delivery"
            );
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(recipient = %email.recipient, "Result email sent");
        Ok(())
    }
}
