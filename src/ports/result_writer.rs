//! Result Writer Port - persists a ranked result for the caller.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::analysis::RankedResult;

/// Port for writing a ranked result to a destination.
///
/// # Contract
///
/// Implementations must:
/// - Write the header row first: original columns, `Topsis Score`, `Rank`
/// - Preserve the row order of the result
/// - Leave no partially written destination behind on failure
#[async_trait]
pub trait ResultWriter: Send + Sync {
    /// Writes `result` to `destination`, returning the final path.
    async fn write(&self, destination: &Path, result: &RankedResult)
        -> Result<PathBuf, ResultWriteError>;
}

/// Errors that can occur while writing a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResultWriteError {
    /// The destination could not be written.
    #[error("Unable to write output file {path}: {reason}")]
    Unwritable { path: String, reason: String },

    /// The result could not be serialized.
    #[error("Unable to serialize result: {reason}")]
    Serialization { reason: String },
}

impl ResultWriteError {
    pub fn unwritable(path: &Path, reason: impl std::fmt::Display) -> Self {
        ResultWriteError::Unwritable {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn serialization(reason: impl std::fmt::Display) -> Self {
        ResultWriteError::Serialization {
            reason: reason.to_string(),
        }
    }
}
