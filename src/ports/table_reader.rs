//! Table Reader Port - loads a raw decision table from a caller-named source.
//!
//! The domain never touches the filesystem. Shells obtain a [`RawTable`]
//! through this port and hand it to the validator.

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use crate::domain::analysis::RawTable;

/// Port for reading a tabular input file.
///
/// # Contract
///
/// Implementations must:
/// - Treat the first record as the header row
/// - Return every data record in file order, cells as text
/// - Distinguish a missing file from an unreadable one
#[async_trait]
pub trait TableReader: Send + Sync {
    /// Reads the table stored at `path`.
    async fn read(&self, path: &Path) -> Result<RawTable, TableReadError>;
}

/// Errors that can occur while loading an input table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableReadError {
    /// The input path does not name an existing file.
    #[error("Input file not found: {path}")]
    NotFound { path: String },

    /// The file exists but is not readable comma-separated text.
    #[error("Unable to read input file: {reason}")]
    Unreadable { reason: String },
}

impl TableReadError {
    pub fn not_found(path: &Path) -> Self {
        TableReadError::NotFound {
            path: path.display().to_string(),
        }
    }

    pub fn unreadable(reason: impl Into<String>) -> Self {
        TableReadError::Unreadable {
            reason: reason.into(),
        }
    }
}
