//! HTTP DTOs for TOPSIS endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{ErrorCode, RankedResult};

/// Weights used when the form leaves the field out.
pub const DEFAULT_WEIGHTS: &str = "1,1,1,1";

/// Impacts used when the form leaves the field out.
pub const DEFAULT_IMPACTS: &str = "+,+,+,+";

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to rank an uploaded table and deliver the result.
#[derive(Debug, Clone, Deserialize)]
pub struct RankRequest {
    /// Table as comma-separated text, header row first.
    pub csv: String,
    #[serde(default = "default_weights")]
    pub weights: String,
    #[serde(default = "default_impacts")]
    pub impacts: String,
    /// Mail the result here instead of returning it.
    #[serde(default)]
    pub email: Option<String>,
}

/// Request to rank an uploaded table and show the result table.
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewRequest {
    pub csv: String,
    #[serde(default = "default_weights")]
    pub weights: String,
    #[serde(default = "default_impacts")]
    pub impacts: String,
}

fn default_weights() -> String {
    DEFAULT_WEIGHTS.to_string()
}

fn default_impacts() -> String {
    DEFAULT_IMPACTS.to_string()
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Result table as shown on the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewResponse {
    /// Original headers followed by the score and rank headers.
    pub headers: Vec<String>,
    pub rows: Vec<PreviewRow>,
}

/// One result row. `cells` holds the identifier and the original criterion text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewRow {
    pub cells: Vec<String>,
    pub score: f64,
    pub rank: u32,
}

impl From<&RankedResult> for PreviewResponse {
    fn from(result: &RankedResult) -> Self {
        let rows = result
            .rows
            .iter()
            .map(|row| {
                let mut cells = Vec::with_capacity(row.alternative.cells.len() + 1);
                cells.push(row.alternative.name.clone());
                cells.extend(row.alternative.cells.iter().cloned());
                PreviewRow {
                    cells,
                    score: row.score,
                    rank: row.rank,
                }
            })
            .collect();

        Self {
            headers: result.output_headers(),
            rows,
        }
    }
}

/// Acknowledgement that the result was handed to the mail service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailSentResponse {
    pub status: String,
    pub recipient: String,
}

impl EmailSentResponse {
    pub fn sent(recipient: impl Into<String>) -> Self {
        Self {
            status: "sent".to_string(),
            recipient: recipient.into(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn from_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(code.as_str(), message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}
