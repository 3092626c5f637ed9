//! Comma-separated text codec shared by every shell.

use crate::domain::analysis::{format_score, RankedResult, RawTable};
use crate::ports::{ResultWriteError, TableReadError};

/// Parses comma-separated text with a header row into a raw table.
///
/// Rows of differing width are passed through so the validator can report
/// which row is ragged.
pub fn parse_raw_table(input: &[u8]) -> Result<RawTable, TableReadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| TableReadError::unreadable(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| TableReadError::unreadable(e.to_string()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawTable { headers, rows })
}

/// Serializes a ranked result: original columns, then `Topsis Score`, then `Rank`.
pub fn render_ranked_result(result: &RankedResult) -> Result<String, ResultWriteError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(result.output_headers())
        .map_err(ResultWriteError::serialization)?;

    for row in &result.rows {
        let mut record = Vec::with_capacity(row.alternative.cells.len() + 3);
        record.push(row.alternative.name.clone());
        record.extend(row.alternative.cells.iter().cloned());
        record.push(format_score(row.score));
        record.push(row.rank.to_string());
        writer
            .write_record(&record)
            .map_err(ResultWriteError::serialization)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ResultWriteError::serialization(e.error()))?;
    String::from_utf8(bytes).map_err(ResultWriteError::serialization)
}
