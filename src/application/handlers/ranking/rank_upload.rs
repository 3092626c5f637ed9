//! RankUploadHandler - ranks an uploaded table for the interactive shell.
//!
//! The result is either handed back for download or mailed to an addressee.

use std::sync::Arc;

use tracing::info;

use crate::adapters::csv::{parse_raw_table, render_ranked_result};
use crate::domain::analysis::RankedResult;
use crate::ports::{validate_recipient, ResultEmail, ResultMailer};

use super::{rank_raw_table, RankError};

/// Command to rank an uploaded table.
#[derive(Debug, Clone)]
pub struct RankUploadCommand {
    /// Uploaded comma-separated text, header row first.
    pub csv: String,
    pub weights: String,
    pub impacts: String,
    /// Addressee for email delivery; blank means download.
    pub recipient: Option<String>,
}

/// How the result leaves the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Download,
    Emailed { recipient: String },
}

/// Result of a successful upload ranking.
#[derive(Debug, Clone)]
pub struct RankUploadResult {
    pub result: RankedResult,
    /// Serialized result file.
    pub csv: String,
    pub file_name: String,
    pub delivery: Delivery,
}

/// Handler for interactive ranking requests.
pub struct RankUploadHandler {
    mailer: Option<Arc<dyn ResultMailer>>,
    file_name: String,
}

impl RankUploadHandler {
    pub fn new(mailer: Option<Arc<dyn ResultMailer>>, file_name: impl Into<String>) -> Self {
        Self {
            mailer,
            file_name: file_name.into(),
        }
    }

    pub async fn handle(&self, cmd: RankUploadCommand) -> Result<RankUploadResult, RankError> {
        // 1. Check delivery can succeed before doing any work
        let recipient = cmd
            .recipient
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string);

        let mailer = match &recipient {
            Some(address) => {
                validate_recipient(address)?;
                Some(self.mailer.as_ref().ok_or(RankError::DeliveryUnavailable)?)
            }
            None => None,
        };

        // 2. Parse, validate and compute
        let raw = parse_raw_table(cmd.csv.as_bytes())?;
        let result = rank_raw_table(&raw, &cmd.weights, &cmd.impacts)?;

        // 3. Serialize
        let csv = match render_ranked_result(&result) {
            Ok(csv) => csv,
            Err(source) => return Err(RankError::output_write_failure(source, result)),
        };

        // 4. Deliver
        let delivery = match (mailer, recipient) {
            (Some(mailer), Some(recipient)) => {
                let email = ResultEmail::topsis_result(&recipient, &self.file_name, &csv);
                mailer.send_result(&email).await?;
                Delivery::Emailed { recipient }
            }
            _ => Delivery::Download,
        };

        info!(
            alternatives = result.rows.len(),
            delivery = ?delivery,
            "TOPSIS result produced"
        );

        Ok(RankUploadResult {
            result,
            csv,
            file_name: self.file_name.clone(),
            delivery,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::email::RecordingMailer;
    use crate::domain::analysis::ValidationError;
    use crate::ports::DeliveryError;

    const SAMPLE: &str = "Name,C1,C2\nA,1,2\nB,2,1\nC,3,3\n";

    fn command(recipient: Option<&str>) -> RankUploadCommand {
        RankUploadCommand {
            csv: SAMPLE.to_string(),
            weights: "1,1".to_string(),
            impacts: "+,+".to_string(),
            recipient: recipient.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn download_returns_serialized_result() {
        let handler = RankUploadHandler::new(None, "result.csv");

        let outcome = handler.handle(command(None)).await.unwrap();

        assert_eq!(outcome.delivery, Delivery::Download);
        assert_eq!(outcome.file_name, "result.csv");
        assert!(outcome.csv.starts_with("Name,C1,C2,Topsis Score,Rank\n"));
        assert!(outcome.csv.contains("\nC,3,3,1.0,1\n"));
    }

    #[tokio::test]
    async fn blank_recipient_means_download() {
        let handler = RankUploadHandler::new(None, "result.csv");
        let outcome = handler.handle(command(Some("   "))).await.unwrap();
        assert_eq!(outcome.delivery, Delivery::Download);
    }

    #[tokio::test]
    async fn email_delivery_sends_attachment() {
        let mailer = RecordingMailer::new();
        let handler = RankUploadHandler::new(Some(Arc::new(mailer.clone())), "result.csv");

        let outcome = handler.handle(command(Some("user@example.com"))).await.unwrap();

        assert_eq!(
            outcome.delivery,
            Delivery::Emailed {
                recipient: "user@example.com".to_string()
            }
        );
        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].attachment_name, "result.csv");
        assert_eq!(sent[0].attachment, outcome.csv);
    }

    #[tokio::test]
    async fn email_without_mailer_is_unavailable() {
        let handler = RankUploadHandler::new(None, "result.csv");
        let result = handler.handle(command(Some("user@example.com"))).await;
        assert!(matches!(result, Err(RankError::DeliveryUnavailable)));
    }

    #[tokio::test]
    async fn invalid_recipient_rejected_before_compute() {
        let mailer = RecordingMailer::new();
        let handler = RankUploadHandler::new(Some(Arc::new(mailer.clone())), "result.csv");

        let mut cmd = command(Some("nobody"));
        cmd.impacts = "+,x".to_string();
        let result = handler.handle(cmd).await;

        assert!(matches!(
            result,
            Err(RankError::Delivery(DeliveryError::InvalidRecipient(_)))
        ));
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn delivery_failure_is_reported() {
        let mailer = RecordingMailer::failing_with(DeliveryError::Rejected {
            status: 403,
            body: "forbidden".to_string(),
        });
        let handler = RankUploadHandler::new(Some(Arc::new(mailer)), "result.csv");

        let result = handler.handle(command(Some("user@example.com"))).await;
        assert!(matches!(
            result,
            Err(RankError::Delivery(DeliveryError::Rejected { status: 403, .. }))
        ));
    }

    #[tokio::test]
    async fn invalid_upload_reports_validation_error() {
        let handler = RankUploadHandler::new(None, "result.csv");
        let mut cmd = command(None);
        cmd.csv = "Name,C1\nA,1\n".to_string();

        let result = handler.handle(cmd).await;
        assert!(matches!(
            result,
            Err(RankError::Validation(ValidationError::InsufficientColumns { found: 2 }))
        ));
    }

    #[tokio::test]
    async fn unterminated_quote_closes_the_record() {
        let handler = RankUploadHandler::new(None, "result.csv");
        let mut cmd = command(None);
        cmd.csv = "Name,C1,C2\nA,\"unterminated,2\n".to_string();

        let result = handler.handle(cmd).await;

        // End of input inside quotes ends the field, leaving a two-cell row.
        assert!(matches!(
            result,
            Err(RankError::Validation(ValidationError::RaggedRow {
                row: 0,
                expected: 3,
                found: 2
            }))
        ));
    }
}
