//! Integration tests for file-to-file ranking.
//!
//! These tests drive the real CSV reader and writer through the
//! `RankFileHandler`, using temporary directories for every file.

use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use topsis_rank::adapters::{CsvResultWriter, CsvTableReader};
use topsis_rank::application::{RankError, RankFileCommand, RankFileHandler};
use topsis_rank::domain::analysis::{ComputeError, ValidationError};
use topsis_rank::ports::TableReadError;

// =============================================================================
// Test Infrastructure
// =============================================================================

const SAMPLE: &str = "Name,C1,C2\nA,1,2\nB,2,1\nC,3,3\n";

fn handler() -> RankFileHandler {
    RankFileHandler::new(
        Arc::new(CsvTableReader::new()),
        Arc::new(CsvResultWriter::new()),
    )
}

fn write_input(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("data.csv");
    std::fs::write(&path, contents).unwrap();
    path
}

fn command(input: &Path, output: &Path, weights: &str, impacts: &str) -> RankFileCommand {
    RankFileCommand {
        input: input.to_path_buf(),
        weights: weights.to_string(),
        impacts: impacts.to_string(),
        output: output.to_path_buf(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn ranks_sample_table_into_result_file() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, SAMPLE);
    let output = dir.path().join("result.csv");

    let outcome = handler()
        .handle(command(&input, &output, "1,1", "+,+"))
        .await
        .unwrap();

    assert_eq!(outcome.written_to, output);

    let written = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Name,C1,C2,Topsis Score,Rank");
    assert_eq!(lines[3], "C,3,3,1.0,1");

    // A and B mirror each other, so they tie on score and share rank 2.
    let a: Vec<&str> = lines[1].split(',').collect();
    let b: Vec<&str> = lines[2].split(',').collect();
    assert_eq!(a[0], "A");
    assert_eq!(b[0], "B");
    assert_eq!(a[3], b[3]);
    assert_eq!(a[4], "2");
    assert_eq!(b[4], "2");
}

#[tokio::test]
async fn cost_impact_reverses_order() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "Name,Price,Storage\nA,10,5\nB,20,5\n");
    let output = dir.path().join("result.csv");

    let benefit = handler()
        .handle(command(&input, &output, "1,1", "+,+"))
        .await
        .unwrap();
    assert_eq!(benefit.result.row("B").unwrap().rank, 1);

    let cost = handler()
        .handle(command(&input, &output, "1,1", "-,+"))
        .await
        .unwrap();
    assert_eq!(cost.result.row("A").unwrap().rank, 1);
}

#[tokio::test]
async fn missing_input_is_reported() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("result.csv");

    let result = handler()
        .handle(command(&dir.path().join("absent.csv"), &output, "1,1", "+,+"))
        .await;

    assert!(matches!(
        result,
        Err(RankError::Read(TableReadError::NotFound { .. }))
    ));
    assert!(!output.exists());
}

#[tokio::test]
async fn arity_mismatch_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, SAMPLE);
    let output = dir.path().join("result.csv");

    let result = handler()
        .handle(command(&input, &output, "1,2,3", "+,-"))
        .await;

    assert!(matches!(
        result,
        Err(RankError::Validation(ValidationError::ArityMismatch {
            criteria: 2,
            weights: 3,
            impacts: 2
        }))
    ));
    assert!(!output.exists());
}

#[tokio::test]
async fn identical_rows_are_degenerate() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "Name,C1,C2\nA,4,4\nB,4,4\n");
    let output = dir.path().join("result.csv");

    let result = handler()
        .handle(command(&input, &output, "1,1", "+,-"))
        .await;

    assert!(matches!(
        result,
        Err(RankError::Compute(ComputeError::DegenerateDistance { .. }))
    ));
    assert!(!output.exists());
}

#[tokio::test]
async fn unwritable_output_keeps_result() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, SAMPLE);
    let output = dir.path().join("missing-dir").join("result.csv");

    let error = handler()
        .handle(command(&input, &output, "1,1", "+,+"))
        .await
        .unwrap_err();

    assert!(matches!(error, RankError::OutputWriteFailure { .. }));
    let unsaved = error.into_unsaved_result().unwrap();
    assert_eq!(unsaved.ranks(), vec![2, 2, 1]);
}
