//! CSV Table Reader - loads a decision table from a file on disk.

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

use crate::domain::analysis::RawTable;
use crate::ports::{TableReadError, TableReader};

use super::parse_raw_table;

/// Maximum input size accepted (10 MB).
const MAX_INPUT_BYTES: u64 = 10 * 1024 * 1024;

/// Reads comma-separated input files.
#[derive(Debug, Clone, Default)]
pub struct CsvTableReader;

impl CsvTableReader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TableReader for CsvTableReader {
    async fn read(&self, path: &Path) -> Result<RawTable, TableReadError> {
        let meta = fs::metadata(path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => TableReadError::not_found(path),
            _ => TableReadError::unreadable(format!("{}: {}", path.display(), e)),
        })?;

        if !meta.is_file() {
            return Err(TableReadError::not_found(path));
        }
        if meta.len() > MAX_INPUT_BYTES {
            return Err(TableReadError::unreadable(format!(
                "{} is {} bytes (max: {})",
                path.display(),
                meta.len(),
                MAX_INPUT_BYTES
            )));
        }

        let bytes = fs::read(path)
            .await
            .map_err(|e| TableReadError::unreadable(format!("{}: {}", path.display(), e)))?;

        parse_raw_table(&bytes)
    }
}
