//! Shared validate-then-compute step used by every ranking use case.

use tracing::{debug, warn};

use crate::domain::analysis::{InputValidator, RankedResult, RawTable, TopsisEngine};

use super::RankError;

/// Validates a raw table and specs, then scores and ranks it.
pub fn rank_raw_table(
    raw: &RawTable,
    weights_spec: &str,
    impacts_spec: &str,
) -> Result<RankedResult, RankError> {
    let input = InputValidator::validate(raw, weights_spec, impacts_spec).map_err(|e| {
        warn!(code = %e.code(), error = %e, "Rejected TOPSIS input");
        RankError::from(e)
    })?;

    debug!(
        alternatives = input.table.alternative_count(),
        criteria = input.table.criteria_count(),
        "Computing TOPSIS scores"
    );

    TopsisEngine::rank(&input).map_err(|e| {
        warn!(code = %e.code(), error = %e, "TOPSIS computation failed");
        RankError::from(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{ComputeError, ValidationError};

    fn raw(rows: Vec<Vec<&str>>) -> RawTable {
        RawTable::new(vec!["Name", "C1", "C2"], rows)
    }

    #[test]
    fn ranks_valid_table() {
        let result = rank_raw_table(
            &raw(vec![vec!["A", "1", "2"], vec!["B", "2", "1"], vec!["C", "3", "3"]]),
            "1,1",
            "+,+",
        )
        .unwrap();

        assert_eq!(result.ranks(), vec![2, 2, 1]);
    }

    #[test]
    fn validation_failures_stop_before_compute() {
        let result = rank_raw_table(&raw(vec![vec!["A", "1", "2"]]), "1,2,3", "+,-");
        assert!(matches!(
            result,
            Err(RankError::Validation(ValidationError::ArityMismatch { .. }))
        ));
    }

    #[test]
    fn degenerate_table_is_compute_error() {
        let result = rank_raw_table(
            &raw(vec![vec!["A", "4", "4"], vec!["B", "4", "4"]]),
            "1,1",
            "+,-",
        );
        assert!(matches!(
            result,
            Err(RankError::Compute(ComputeError::DegenerateDistance { .. }))
        ));
    }
}
