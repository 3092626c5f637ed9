//! HTTP handlers for TOPSIS endpoints.
//!
//! These handlers connect Axum routes to the upload ranking use case.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::application::handlers::{Delivery, RankError, RankUploadCommand, RankUploadHandler};
use crate::config::OutputConfig;
use crate::domain::analysis::ErrorCode;
use crate::ports::{DeliveryError, ResultMailer};

use super::dto::{EmailSentResponse, ErrorResponse, PreviewRequest, PreviewResponse, RankRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// TOPSIS API error that implements IntoResponse.
#[derive(Debug)]
pub struct TopsisApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl TopsisApiError {
    fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse::new(code, message),
        }
    }
}

impl IntoResponse for TopsisApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<RankError> for TopsisApiError {
    fn from(error: RankError) -> Self {
        let message = error.to_string();
        match error {
            RankError::Validation(e) => {
                TopsisApiError::new(StatusCode::BAD_REQUEST, e.code().as_str(), message)
            }
            RankError::Compute(e) => {
                let status = match e.code() {
                    ErrorCode::DegenerateDistance | ErrorCode::NonFiniteScore => {
                        StatusCode::UNPROCESSABLE_ENTITY
                    }
                    _ => StatusCode::BAD_REQUEST,
                };
                TopsisApiError::new(status, e.code().as_str(), message)
            }
            RankError::Read(_) => {
                TopsisApiError::new(StatusCode::BAD_REQUEST, "INPUT_UNREADABLE", message)
            }
            RankError::Delivery(DeliveryError::InvalidRecipient(_)) => {
                TopsisApiError::new(StatusCode::BAD_REQUEST, "INVALID_RECIPIENT", message)
            }
            RankError::Delivery(_) => {
                TopsisApiError::new(StatusCode::BAD_GATEWAY, "DELIVERY_FAILED", message)
            }
            RankError::DeliveryUnavailable => TopsisApiError::new(
                StatusCode::SERVICE_UNAVAILABLE,
                "DELIVERY_UNAVAILABLE",
                message,
            ),
            RankError::OutputWriteFailure { .. } => {
                error!(error = %message, "Failed to serialize TOPSIS result");
                TopsisApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: ErrorResponse::internal("Failed to produce result file"),
                }
            }
        }
    }
}

impl From<JsonRejection> for TopsisApiError {
    fn from(rejection: JsonRejection) -> Self {
        TopsisApiError::new(
            rejection.status(),
            "INVALID_REQUEST_BODY",
            rejection.body_text(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for the TOPSIS endpoints.
#[derive(Clone)]
pub struct TopsisAppState {
    pub mailer: Option<Arc<dyn ResultMailer>>,
    pub download_file_name: String,
}

impl TopsisAppState {
    pub fn new(mailer: Option<Arc<dyn ResultMailer>>, output: &OutputConfig) -> Self {
        Self {
            mailer,
            download_file_name: output.download_file_name.clone(),
        }
    }

    pub fn rank_upload_handler(&self) -> RankUploadHandler {
        RankUploadHandler::new(self.mailer.clone(), self.download_file_name.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

/// POST /api/topsis/preview
///
/// Ranks the uploaded table and returns it with score and rank columns.
pub async fn preview_ranking(
    State(state): State<TopsisAppState>,
    payload: Result<Json<PreviewRequest>, JsonRejection>,
) -> Result<Json<PreviewResponse>, TopsisApiError> {
    let Json(request) = payload?;
    let command = RankUploadCommand {
        csv: request.csv,
        weights: request.weights,
        impacts: request.impacts,
        recipient: None,
    };

    let outcome = state.rank_upload_handler().handle(command).await?;

    Ok(Json(PreviewResponse::from(&outcome.result)))
}

/// POST /api/topsis
///
/// Ranks the uploaded table. Without an email address the result file is
/// returned as an attachment; with one it is mailed and 202 is returned.
pub async fn submit_ranking(
    State(state): State<TopsisAppState>,
    payload: Result<Json<RankRequest>, JsonRejection>,
) -> Result<Response, TopsisApiError> {
    let Json(request) = payload?;
    let command = RankUploadCommand {
        csv: request.csv,
        weights: request.weights,
        impacts: request.impacts,
        recipient: request.email,
    };

    let outcome = state.rank_upload_handler().handle(command).await?;

    let response = match outcome.delivery {
        Delivery::Download => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", outcome.file_name),
                ),
            ],
            outcome.csv,
        )
            .into_response(),
        Delivery::Emailed { recipient } => (
            StatusCode::ACCEPTED,
            Json(EmailSentResponse::sent(recipient)),
        )
            .into_response(),
    };

    Ok(response)
}
