//! Result Mailer Port - delivers a serialized result to an addressee.
//!
//! Credentials belong to the adapter's configuration, injected at startup.

use async_trait::async_trait;
use thiserror::Error;

/// A result file addressed to one recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEmail {
    pub recipient: String,
    pub subject: String,
    pub body: String,
    /// Attachment file name, e.g. `result.csv`.
    pub attachment_name: String,
    /// Attachment content (comma-separated text).
    pub attachment: String,
}

impl ResultEmail {
    /// Creates the standard result email for a TOPSIS run.
    pub fn topsis_result(
        recipient: impl Into<String>,
        attachment_name: impl Into<String>,
        attachment: impl Into<String>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            subject: "TOPSIS Result".to_string(),
            body: "Please find attached the TOPSIS result file.".to_string(),
            attachment_name: attachment_name.into(),
            attachment: attachment.into(),
        }
    }
}

/// Port for outbound result delivery.
#[async_trait]
pub trait ResultMailer: Send + Sync {
    /// Sends the email, reporting success or the reason for failure.
    async fn send_result(&self, email: &ResultEmail) -> Result<(), DeliveryError>;
}

/// Errors that can occur during result delivery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("Invalid recipient address: '{0}'")]
    InvalidRecipient(String),

    /// The provider answered with a non-success status.
    #[error("Email provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// The provider could not be reached.
    #[error("Email transport failed: {0}")]
    Transport(String),
}

/// Checks that an address has exactly one `@` with non-empty local and domain parts.
pub fn validate_recipient(address: &str) -> Result<(), DeliveryError> {
    let address = address.trim();
    match address.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(())
        }
        _ => Err(DeliveryError::InvalidRecipient(address.to_string())),
    }
}
