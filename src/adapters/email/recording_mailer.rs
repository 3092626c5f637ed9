//! Recording Mailer for testing.
//!
//! Captures every email instead of sending it, and can be told to fail so
//! delivery error paths can be exercised without a live provider.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::ports::{validate_recipient, DeliveryError, ResultEmail, ResultMailer};

/// In-memory mailer that records sent emails.
#[derive(Debug, Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<ResultEmail>>>,
    failure: Option<DeliveryError>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every send fail with `error`.
    pub fn failing_with(error: DeliveryError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Returns a copy of every email sent so far.
    pub fn sent(&self) -> Vec<ResultEmail> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ResultMailer for RecordingMailer {
    async fn send_result(&self, email: &ResultEmail) -> Result<(), DeliveryError> {
        validate_recipient(&email.recipient)?;
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(email.clone());
        }
        Ok(())
    }
}
