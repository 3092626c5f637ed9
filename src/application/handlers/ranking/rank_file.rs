//! RankFileHandler - ranks a table file and writes the result file.
//!
//! The command-line shell: input path, weight and impact specs, output path.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::analysis::RankedResult;
use crate::ports::{ResultWriter, TableReader};

use super::{rank_raw_table, RankError};

/// Command to rank the alternatives in a file.
#[derive(Debug, Clone)]
pub struct RankFileCommand {
    pub input: PathBuf,
    pub weights: String,
    pub impacts: String,
    pub output: PathBuf,
}

/// Result of a successful file ranking.
#[derive(Debug, Clone)]
pub struct RankFileResult {
    pub result: RankedResult,
    pub written_to: PathBuf,
}

/// Handler for file-to-file ranking.
pub struct RankFileHandler {
    reader: Arc<dyn TableReader>,
    writer: Arc<dyn ResultWriter>,
}

impl RankFileHandler {
    pub fn new(reader: Arc<dyn TableReader>, writer: Arc<dyn ResultWriter>) -> Self {
        Self { reader, writer }
    }

    pub async fn handle(&self, cmd: RankFileCommand) -> Result<RankFileResult, RankError> {
        // 1. Load
        let raw = self.reader.read(&cmd.input).await?;

        // 2. Validate and compute
        let result = rank_raw_table(&raw, &cmd.weights, &cmd.impacts)?;

        // 3. Write; keep the result if the destination fails
        let written_to = match self.writer.write(&cmd.output, &result).await {
            Ok(path) => path,
            Err(source) => {
                warn!(output = %cmd.output.display(), error = %source, "Failed to write result");
                return Err(RankError::output_write_failure(source, result));
            }
        };

        info!(
            input = %cmd.input.display(),
            output = %written_to.display(),
            alternatives = result.rows.len(),
            "TOPSIS result written"
        );

        Ok(RankFileResult { result, written_to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{RawTable, ValidationError};
    use crate::ports::{ResultWriteError, TableReadError};
    use async_trait::async_trait;
    use std::path::Path;
    use std::sync::Mutex;

    struct MockTableReader {
        table: Option<RawTable>,
    }

    #[async_trait]
    impl TableReader for MockTableReader {
        async fn read(&self, path: &Path) -> Result<RawTable, TableReadError> {
            self.table
                .clone()
                .ok_or_else(|| TableReadError::not_found(path))
        }
    }

    struct MockResultWriter {
        written: Mutex<Vec<(PathBuf, RankedResult)>>,
        fail: bool,
    }

    impl MockResultWriter {
        fn new() -> Self {
            Self {
                written: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                written: Mutex::new(Vec::new()),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl ResultWriter for MockResultWriter {
        async fn write(
            &self,
            destination: &Path,
            result: &RankedResult,
        ) -> Result<PathBuf, ResultWriteError> {
            if self.fail {
                return Err(ResultWriteError::unwritable(destination, "read-only"));
            }
            self.written
                .lock()
                .unwrap()
                .push((destination.to_path_buf(), result.clone()));
            Ok(destination.to_path_buf())
        }
    }

    fn sample_table() -> RawTable {
        RawTable::new(
            vec!["Name", "C1", "C2"],
            vec![vec!["A", "1", "2"], vec!["B", "2", "1"], vec!["C", "3", "3"]],
        )
    }

    fn command(weights: &str, impacts: &str) -> RankFileCommand {
        RankFileCommand {
            input: PathBuf::from("data.csv"),
            weights: weights.to_string(),
            impacts: impacts.to_string(),
            output: PathBuf::from("result.csv"),
        }
    }

    #[tokio::test]
    async fn writes_ranked_result() {
        let writer = Arc::new(MockResultWriter::new());
        let handler = RankFileHandler::new(
            Arc::new(MockTableReader {
                table: Some(sample_table()),
            }),
            writer.clone(),
        );

        let outcome = handler.handle(command("1,1", "+,+")).await.unwrap();

        assert_eq!(outcome.written_to, PathBuf::from("result.csv"));
        assert_eq!(outcome.result.row("C").unwrap().rank, 1);
        assert_eq!(writer.written.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_input_is_read_error() {
        let handler = RankFileHandler::new(
            Arc::new(MockTableReader { table: None }),
            Arc::new(MockResultWriter::new()),
        );

        let result = handler.handle(command("1,1", "+,+")).await;
        assert!(matches!(result, Err(RankError::Read(TableReadError::NotFound { .. }))));
    }

    #[tokio::test]
    async fn invalid_input_writes_nothing() {
        let writer = Arc::new(MockResultWriter::new());
        let handler = RankFileHandler::new(
            Arc::new(MockTableReader {
                table: Some(sample_table()),
            }),
            writer.clone(),
        );

        let result = handler.handle(command("1,1", "+,x")).await;

        assert!(matches!(
            result,
            Err(RankError::Validation(ValidationError::InvalidImpactSymbol { .. }))
        ));
        assert!(writer.written.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn write_failure_returns_computed_result() {
        let handler = RankFileHandler::new(
            Arc::new(MockTableReader {
                table: Some(sample_table()),
            }),
            Arc::new(MockResultWriter::failing()),
        );

        let error = handler.handle(command("1,1", "+,+")).await.unwrap_err();
        assert!(error.to_string().contains("Unable to write output file"));

        let unsaved = error.into_unsaved_result().unwrap();
        assert_eq!(unsaved.ranks(), vec![2, 2, 1]);
    }
}
