//! Errors raised by the ranking use cases.

use thiserror::Error;

use crate::domain::analysis::{ComputeError, ErrorCode, RankedResult, ValidationError};
use crate::ports::{DeliveryError, ResultWriteError, TableReadError};

/// Everything that can stop a ranking request. There is no partial result:
/// either a complete `RankedResult` is produced or one of these is returned.
#[derive(Debug, Error)]
pub enum RankError {
    #[error(transparent)]
    Read(#[from] TableReadError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Compute(#[from] ComputeError),

    /// The result was computed but could not be written or serialized.
    /// It is handed back so the caller can choose another destination.
    #[error("{source}")]
    OutputWriteFailure {
        source: ResultWriteError,
        result: Box<RankedResult>,
    },

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error("Email delivery is not configured")]
    DeliveryUnavailable,
}

impl RankError {
    pub fn output_write_failure(source: ResultWriteError, result: RankedResult) -> Self {
        RankError::OutputWriteFailure {
            source,
            result: Box::new(result),
        }
    }

    /// Domain error code, when the failure is an input or numeric problem.
    pub fn domain_code(&self) -> Option<ErrorCode> {
        match self {
            RankError::Validation(e) => Some(e.code()),
            RankError::Compute(e) => Some(e.code()),
            _ => None,
        }
    }

    /// Takes back the computed result from an output failure.
    pub fn into_unsaved_result(self) -> Option<RankedResult> {
        match self {
            RankError::OutputWriteFailure { result, .. } => Some(*result),
            _ => None,
        }
    }
}
