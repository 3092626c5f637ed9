//! CSV Result Writer - atomically writes a ranked result to disk.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::analysis::RankedResult;
use crate::ports::{ResultWriteError, ResultWriter};

use super::render_ranked_result;

/// Writes comma-separated result files.
///
/// # Atomic Writes
///
/// 1. Write content to `{name}.tmp` next to the destination
/// 2. Sync to disk
/// 3. Rename over the destination
///
/// A failed write never leaves a truncated result file behind.
#[derive(Debug, Clone, Default)]
pub struct CsvResultWriter;

impl CsvResultWriter {
    pub fn new() -> Self {
        Self
    }

    /// Returns the temporary file path for atomic writes.
    fn temp_path(destination: &Path) -> PathBuf {
        let mut name = destination
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        destination.with_file_name(name)
    }

    async fn write_atomic(destination: &Path, content: &str) -> Result<(), ResultWriteError> {
        let temp_path = Self::temp_path(destination);

        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| ResultWriteError::unwritable(destination, e))?;

        file.write_all(content.as_bytes())
            .await
            .map_err(|e| ResultWriteError::unwritable(destination, e))?;

        file.sync_all()
            .await
            .map_err(|e| ResultWriteError::unwritable(destination, e))?;

        fs::rename(&temp_path, destination)
            .await
            .map_err(|e| ResultWriteError::unwritable(destination, e))
    }
}

#[async_trait]
impl ResultWriter for CsvResultWriter {
    async fn write(
        &self,
        destination: &Path,
        result: &RankedResult,
    ) -> Result<PathBuf, ResultWriteError> {
        if destination.file_name().is_none() {
            return Err(ResultWriteError::unwritable(destination, "not a file path"));
        }

        let content = render_ranked_result(result)?;

        if let Err(error) = Self::write_atomic(destination, &content).await {
            let _ = fs::remove_file(Self::temp_path(destination)).await;
            return Err(error);
        }

        Ok(destination.to_path_buf())
    }
}
